use serde::Serialize;

use crate::consts::FAILED_FETCH_SENTINEL;
use crate::models::{Annotations, MergeEvent, Rsid};

///
/// One report line per rsid of the input.
///
/// A fetched row carries the merge history and the annotation fields; a failed row
/// only remembers which rsid could not be retrieved.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReportRow {
    Fetched {
        rsid: Rsid,
        merges: Vec<MergeEvent>,
        annotations: Annotations,
    },
    Failed {
        rsid: Rsid,
    },
}

impl ReportRow {
    pub fn rsid(&self) -> &Rsid {
        match self {
            ReportRow::Fetched { rsid, .. } => rsid,
            ReportRow::Failed { rsid } => rsid,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReportRow::Failed { .. })
    }

    ///
    /// Lay the row out as report columns, each column holding one or more values.
    ///
    /// Fetched rows have one column per header entry, where the three merge columns hold one
    /// value per merge event (and may be empty). Failed rows have exactly two columns: the rsid
    /// and [`FAILED_FETCH_SENTINEL`].
    ///
    pub fn columns(&self) -> Vec<Vec<String>> {
        match self {
            ReportRow::Failed { rsid } => vec![
                vec![rsid.to_string()],
                vec![FAILED_FETCH_SENTINEL.to_string()],
            ],
            ReportRow::Fetched {
                rsid,
                merges,
                annotations,
            } => {
                let mut columns = Vec::with_capacity(10);
                columns.push(vec![rsid.to_string()]);
                columns.push(merges.iter().map(|m| m.merged_id.clone()).collect());
                columns.push(merges.iter().map(|m| m.merge_date.clone()).collect());
                columns.push(merges.iter().map(|m| m.revision.clone()).collect());
                columns.extend(
                    annotations
                        .as_columns()
                        .iter()
                        .map(|value| vec![value.to_string()]),
                );
                columns
            }
        }
    }
}
