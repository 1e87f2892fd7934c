//! Constants shared by the report model, the readers and the writers.

/// Text of the single cell that follows the rsid in the row of an rsid that could not be fetched.
pub const FAILED_FETCH_SENTINEL: &str = "FAILED TO FETCH DATA";

/// Column titles of the report, in output order.
///
/// The trailing `Clinical` column is reserved: fetched rows always carry an empty cell there.
pub const REPORT_HEADER: [&str; 10] = [
    "Original RSID",
    "All Merged RSIDs",
    "Merged Dates",
    "Revisions",
    "Locus",
    "Name",
    "Orientation",
    "Sequence Ontology",
    "hg38 Position",
    "Clinical",
];

/// Separator placed between the sub-values of a multi-valued report cell.
pub const MULTI_VALUE_SEPARATOR: &str = ";";

/// Default delimiter of the rsid input file.
pub const DEFAULT_INPUT_DELIMITER: u8 = b',';

/// Diagnostics file holding the most recently parsed JSON document.
pub const DEBUG_JSON_FILE: &str = "DEBUG_json_obj.txt";

/// Diagnostics file holding every rsid read from the input.
pub const DEBUG_RSID_FILE: &str = "DEBUG_rsid_vec.txt";
