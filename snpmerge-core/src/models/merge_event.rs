use serde::Serialize;

///
/// A single historical merge: the rsid `merged_id` was retired and folded into
/// the rsid the record was fetched for.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeEvent {
    pub merged_id: String,
    pub merge_date: String,
    pub revision: String,
}

impl MergeEvent {
    pub fn new(merged_id: &str, merge_date: &str, revision: &str) -> Self {
        MergeEvent {
            merged_id: merged_id.to_string(),
            merge_date: merge_date.to_string(),
            revision: revision.to_string(),
        }
    }
}
