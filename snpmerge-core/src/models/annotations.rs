use serde::Serialize;

///
/// The single-valued annotation fields of a fetched record.
///
/// Every field is an empty string when the document did not carry it.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub locus: String,
    pub gene_name: String,
    pub orientation: String,
    pub sequence_ontology: String,
    pub position: String,
    /// Reserved column, never populated.
    pub clinical: String,
}

impl Annotations {
    /// Values in report column order.
    pub fn as_columns(&self) -> [&str; 6] {
        [
            self.locus.as_str(),
            self.gene_name.as_str(),
            self.orientation.as_str(),
            self.sequence_ontology.as_str(),
            self.position.as_str(),
            self.clinical.as_str(),
        ]
    }
}
