use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::{debug, warn};

use crate::consts::DEFAULT_INPUT_DELIMITER;
use crate::diagnostics::DiagnosticsSink;
use crate::errors::{Result, SnpMergeError};
use crate::models::Rsid;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| SnpMergeError::InputReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Parse a delimiter given on the command line. Accepts a single byte character, or the
/// words `tab`/`\t` for tab separated input.
///
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if raw.len() == 1 => Ok(raw.as_bytes()[0]),
        _ => Err(SnpMergeError::InvalidDelimiter(raw.to_string())),
    }
}

///
/// Read rsids from a delimited text source: the first field of each row is the rsid.
///
/// Rows of any width are accepted. Blank rows, rows whose first field is empty and rows that
/// cannot be decoded (invalid UTF-8, malformed quoting) are skipped. Only I/O errors are fatal.
///
/// # Arguments
/// - reader: the delimited text
/// - delimiter: field delimiter, e.g. `b','`
pub fn read_rsids_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Rsid>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rsids = Vec::new();
    for record in csv_reader.byte_records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Skipping malformed input row: {}", e);
                continue;
            }
        };

        let line = record.position().map(|p| p.line());
        let first = match record.get(0).map(std::str::from_utf8) {
            Some(Ok(first)) => first.trim(),
            Some(Err(e)) => {
                warn!("Skipping input row at line {:?}: {}", line, e);
                continue;
            }
            None => "",
        };

        if first.is_empty() {
            debug!("Skipping blank input row at line {:?}", line);
            continue;
        }
        rsids.push(Rsid::from(first));
    }

    Ok(rsids)
}

///
/// Read every rsid of an input file (or stdin for `-`), and dump them to the diagnostics sink.
///
/// # Arguments
/// - path: path to a delimited text file, optionally gzip'd
/// - delimiter: field delimiter, [`DEFAULT_INPUT_DELIMITER`] when `None`
/// - diagnostics: where to dump the rsid list
pub fn read_rsids(
    path: &str,
    delimiter: Option<u8>,
    diagnostics: &DiagnosticsSink,
) -> Result<Vec<Rsid>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let rsids = read_rsids_from_reader(reader, delimiter.unwrap_or(DEFAULT_INPUT_DELIMITER))?;

    diagnostics.record_rsids(&rsids);
    Ok(rsids)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::path::PathBuf;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn path_to_rsids_csv() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/rsids.csv")
    }

    #[rstest]
    fn test_read_rsids_skips_blank_rows() {
        let input = "rs123,extra\n\n,orphan\n  rs456  \nrs789,a,b,c\n";
        let rsids = read_rsids_from_reader(input.as_bytes(), b',').unwrap();
        assert_eq!(
            rsids,
            vec![Rsid::from("rs123"), Rsid::from("rs456"), Rsid::from("rs789")]
        );
    }

    #[rstest]
    fn test_read_rsids_skips_rows_with_invalid_utf8() {
        let input: &[u8] = b"rs1\n\xff\xfe,junk\nrs2\n";
        let rsids = read_rsids_from_reader(input, b',').unwrap();
        assert_eq!(rsids, vec![Rsid::from("rs1"), Rsid::from("rs2")]);
    }

    #[rstest]
    fn test_read_rsids_keeps_rows_with_invalid_utf8_after_the_rsid() {
        let input: &[u8] = b"rs1,\xff\nrs2\n";
        let rsids = read_rsids_from_reader(input, b',').unwrap();
        assert_eq!(rsids, vec![Rsid::from("rs1"), Rsid::from("rs2")]);
    }

    #[rstest]
    fn test_read_rsids_tab_delimited() {
        let input = "rs1\tchr1\nrs2\tchr2\n";
        let rsids = read_rsids_from_reader(input.as_bytes(), b'\t').unwrap();
        assert_eq!(rsids, vec![Rsid::from("rs1"), Rsid::from("rs2")]);
    }

    #[rstest]
    fn test_read_rsids_from_file(path_to_rsids_csv: PathBuf) {
        let rsids = read_rsids(
            path_to_rsids_csv.to_str().unwrap(),
            None,
            &DiagnosticsSink::Disabled,
        )
        .unwrap();
        assert_eq!(rsids.len(), 4);
        assert_eq!(rsids[0], Rsid::from("rs6311"));
    }

    #[rstest]
    fn test_read_rsids_gzipped_matches_plain(path_to_rsids_csv: PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        let gz_path = tempdir.path().join("rsids.csv.gz");

        let plain = std::fs::read(&path_to_rsids_csv).unwrap();
        let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
        encoder.write_all(&plain).unwrap();
        encoder.finish().unwrap();

        let sink = DiagnosticsSink::Disabled;
        let from_gz = read_rsids(gz_path.to_str().unwrap(), None, &sink).unwrap();
        let from_plain = read_rsids(path_to_rsids_csv.to_str().unwrap(), None, &sink).unwrap();
        assert_eq!(from_gz, from_plain);
    }

    #[rstest]
    fn test_missing_input_is_an_error() {
        let result = read_rsids("does/not/exist.csv", None, &DiagnosticsSink::Disabled);
        assert!(matches!(result, Err(SnpMergeError::InputReadError(_))));
    }

    #[rstest]
    #[case(",", b',')]
    #[case("tab", b'\t')]
    #[case(";", b';')]
    fn test_parse_delimiter(#[case] raw: &str, #[case] expected: u8) {
        assert_eq!(parse_delimiter(raw).unwrap(), expected);
    }

    #[rstest]
    fn test_parse_delimiter_rejects_words() {
        assert!(parse_delimiter("comma").is_err());
    }
}
