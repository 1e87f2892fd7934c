//! Pulling report fields out of a dbSNP refsnp JSON document.
//!
//! Every lookup is null-safe: a missing key, an index past the end of an array or a value of
//! the wrong shape yields `None` at that step, and only becomes an empty string where the
//! field is stored. Extraction therefore never fails.

use serde_json::Value;

use snpmerge_core::models::{Annotations, MergeEvent, ReportRow, Rsid};

use super::consts::{
    GENE_NAME_POINTER, GENE_POINTER, LOCUS_POINTER, MERGE_DATE_KEY, MERGED_RSID_KEY,
    MERGES_POINTER, ORIENTATION_POINTER, POSITION_POINTER, REVISION_KEY,
    SEQUENCE_ONTOLOGY_POINTER,
};
use super::fetch::is_empty_document;

/// Render a scalar JSON value as report text. Containers and `null` have no text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Follow a JSON pointer from `value` and render what is found there.
pub fn lookup_text(value: Option<&Value>, pointer: &str) -> Option<String> {
    value
        .and_then(|v| v.pointer(pointer))
        .and_then(scalar_text)
}

fn field(value: Option<&Value>, pointer: &str) -> String {
    lookup_text(value, pointer).unwrap_or_default()
}

/// Collect the record's merge history in document order.
pub fn extract_merges(document: &Value) -> Vec<MergeEvent> {
    let Some(merges) = document.pointer(MERGES_POINTER).and_then(Value::as_array) else {
        return Vec::new();
    };

    merges
        .iter()
        .map(|merge| MergeEvent {
            merged_id: merge.get(MERGED_RSID_KEY).and_then(scalar_text).unwrap_or_default(),
            merge_date: merge.get(MERGE_DATE_KEY).and_then(scalar_text).unwrap_or_default(),
            revision: merge.get(REVISION_KEY).and_then(scalar_text).unwrap_or_default(),
        })
        .collect()
}

pub fn extract_annotations(document: &Value) -> Annotations {
    let gene = document.pointer(GENE_POINTER);

    Annotations {
        locus: field(gene, LOCUS_POINTER),
        gene_name: field(gene, GENE_NAME_POINTER),
        orientation: field(gene, ORIENTATION_POINTER),
        sequence_ontology: field(gene, SEQUENCE_ONTOLOGY_POINTER),
        position: field(Some(document), POSITION_POINTER),
        clinical: String::new(),
    }
}

///
/// Turn a fetched document into a report row and the rsid's merged-rsid list.
///
/// # Arguments
/// - rsid: the rsid the document was fetched for
/// - document: the parsed record, `None` when fetching gave up
///
/// # Returns
/// - a [`ReportRow::Failed`] and `[rsid]` when the document is absent or empty
/// - otherwise a [`ReportRow::Fetched`] and `[rsid, merged_id...]` in document order
pub fn extract_record(rsid: &Rsid, document: Option<&Value>) -> (ReportRow, Vec<String>) {
    let mut merged_rsids = vec![rsid.to_string()];

    let document = match document {
        Some(document) if !is_empty_document(document) => document,
        _ => return (ReportRow::Failed { rsid: rsid.clone() }, merged_rsids),
    };

    let merges = extract_merges(document);
    merged_rsids.extend(merges.iter().map(|merge| merge.merged_id.clone()));

    let row = ReportRow::Fetched {
        rsid: rsid.clone(),
        merges,
        annotations: extract_annotations(document),
    };

    (row, merged_rsids)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;
    use snpmerge_core::consts::FAILED_FETCH_SENTINEL;

    #[fixture]
    fn rs6311_document() -> Value {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/rs6311.json");
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[rstest]
    fn test_extract_full_record(rs6311_document: Value) {
        let (row, merged) = extract_record(&Rsid::from("rs6311"), Some(&rs6311_document));

        assert_eq!(merged, vec!["rs6311", "17289364", "52825020"]);
        assert_eq!(
            row,
            ReportRow::Fetched {
                rsid: Rsid::from("rs6311"),
                merges: vec![
                    MergeEvent::new("17289364", "2004-10-01T04:52Z", "123"),
                    MergeEvent::new("52825020", "2006-03-11T09:02Z", "126"),
                ],
                annotations: Annotations {
                    locus: "HTR2A".to_string(),
                    gene_name: "5-hydroxytryptamine receptor 2A".to_string(),
                    orientation: "minus".to_string(),
                    sequence_ontology: "5_prime_UTR_variant".to_string(),
                    position: "46897342".to_string(),
                    clinical: String::new(),
                },
            }
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(json!({})))]
    #[case(Some(json!(null)))]
    fn test_empty_document_degrades_row(#[case] document: Option<Value>) {
        let (row, merged) = extract_record(&Rsid::from("rs1"), document.as_ref());

        let columns = row.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1], vec![FAILED_FETCH_SENTINEL]);
        assert_eq!(merged, vec!["rs1"]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn test_merge_columns_have_one_value_per_merge(#[case] n: usize) {
        let merges: Vec<Value> = (0..n)
            .map(|i| json!({"merged_rsid": format!("{}", 100 + i), "revision": "130", "merge_date": "2008-01-01T00:00Z"}))
            .collect();
        let document = json!({"refsnp_id": "9", "dbsnp1_merges": merges});

        let (row, merged) = extract_record(&Rsid::from("rs9"), Some(&document));
        let columns = row.columns();

        assert_eq!(columns[1].len(), n);
        assert_eq!(columns[2].len(), n);
        assert_eq!(columns[3].len(), n);
        assert_eq!(merged.len(), n + 1);
        assert_eq!(merged[0], "rs9");
    }

    #[rstest]
    #[case(json!({"refsnp_id": "1"}))]
    #[case(json!({"dbsnp1_merges": "not an array"}))]
    #[case(json!({"dbsnp1_merges": [{}], "primary_snapshot_data": {}}))]
    #[case(json!({"primary_snapshot_data": {"allele_annotations": []}}))]
    #[case(json!({"primary_snapshot_data": {"allele_annotations": [{"assembly_annotation": [{"genes": [{"rnas": []}]}]}]}}))]
    #[case(json!({"present_obs_movements": [{"allele_in_cur_release": null}]}))]
    #[case(json!({"present_obs_movements": {"0": 1}}))]
    #[case(json!([1, 2, 3]))]
    fn test_missing_paths_yield_empty_fields(#[case] document: Value) {
        let (row, _) = extract_record(&Rsid::from("rs1"), Some(&document));

        match row {
            ReportRow::Fetched {
                merges,
                annotations,
                ..
            } => {
                assert!(merges.iter().all(|m| m.merge_date.is_empty()));
                assert_eq!(annotations, Annotations::default());
            }
            ReportRow::Failed { .. } => panic!("non-empty document must not degrade the row"),
        }
    }

    #[rstest]
    fn test_numeric_fields_are_rendered_as_text() {
        let document = json!({
            "dbsnp1_merges": [{"merged_rsid": 42, "merge_date": "2001", "revision": 99}],
            "present_obs_movements": [{"allele_in_cur_release": {"position": 12345}}]
        });

        let (row, merged) = extract_record(&Rsid::from("rs7"), Some(&document));

        assert_eq!(merged, vec!["rs7", "42"]);
        let columns = row.columns();
        assert_eq!(columns[3], vec!["99"]);
        assert_eq!(columns[8], vec!["12345"]);
    }

    #[rstest]
    #[case(json!("a"), Some("a"))]
    #[case(json!(7), Some("7"))]
    #[case(json!(true), Some("true"))]
    #[case(json!(null), None)]
    #[case(json!({"a": 1}), None)]
    fn test_scalar_text(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(scalar_text(&value).as_deref(), expected);
    }
}
