use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::{MULTI_VALUE_SEPARATOR, REPORT_HEADER};
use crate::errors::{Result, SnpMergeError};
use crate::models::ReportRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = SnpMergeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(SnpMergeError::UnknownReportFormat(s.to_string())),
        }
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

///
/// The merge-history report: a fixed header followed by one row per rsid,
/// in the order the rsids were processed.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    header: &'a [&'a str],
    rows: &'a [ReportRow],
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &'static [&'static str] {
        &REPORT_HEADER
    }

    /// Data rows, without the header.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_failed()).count()
    }

    ///
    /// The full ragged table, row x column x value, header first.
    ///
    pub fn table(&self) -> Vec<Vec<Vec<String>>> {
        let header: Vec<Vec<String>> = REPORT_HEADER
            .iter()
            .map(|title| vec![title.to_string()])
            .collect();

        std::iter::once(header)
            .chain(self.rows.iter().map(|row| row.columns()))
            .collect()
    }

    ///
    /// Write the report as CSV. Multi-valued cells are joined with [`MULTI_VALUE_SEPARATOR`].
    ///
    /// # Arguments
    /// - writer: destination of the CSV text
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        for row in self.table() {
            let cells: Vec<String> = row
                .iter()
                .map(|values| values.join(MULTI_VALUE_SEPARATOR))
                .collect();
            csv_writer.write_record(&cells)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    ///
    /// Write the report as a JSON document with a `header` and a `rows` array.
    ///
    /// # Arguments
    /// - writer: destination of the JSON text
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        let document = ReportDocument {
            header: &REPORT_HEADER,
            rows: &self.rows,
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        Ok(())
    }

    ///
    /// Save the report to disk in the given format, overwriting any existing file.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - format: csv or json
    pub fn to_file<T: AsRef<Path>>(&self, path: T, format: ReportFormat) -> Result<()> {
        let writer = create_output(path.as_ref())?;
        match format {
            ReportFormat::Csv => self.write_csv(writer),
            ReportFormat::Json => self.write_json(writer),
        }
    }
}

///
/// For each processed rsid, the rsid itself followed by every rsid merged into it.
///
/// Entries are kept parallel to the rows of the [`Report`].
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedRsidLedger {
    entries: Vec<Vec<String>>,
}

impl MergedRsidLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, merged_rsids: Vec<String>) {
        self.entries.push(merged_rsids);
    }

    pub fn entries(&self) -> &[Vec<String>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write one CSV line per entry; lines have as many cells as the entry has rsids.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        for entry in &self.entries {
            csv_writer.write_record(entry)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_file<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let writer = create_output(path.as_ref())?;
        self.write_csv(writer)
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            SnpMergeError::OutputWriteError(format!("{}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| SnpMergeError::OutputWriteError(format!("{}: {}", path.display(), e)))?;

    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FAILED_FETCH_SENTINEL;
    use crate::models::{Annotations, MergeEvent, Rsid};

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn report() -> Report {
        let mut report = Report::new();
        report.push(ReportRow::Fetched {
            rsid: Rsid::from("rs123"),
            merges: vec![
                MergeEvent::new("111", "2001-01-01T00:00Z", "100"),
                MergeEvent::new("222", "2002-02-02T00:00Z", "101"),
            ],
            annotations: Annotations {
                locus: "GENE1".to_string(),
                position: "42".to_string(),
                ..Default::default()
            },
        });
        report.push(ReportRow::Failed {
            rsid: Rsid::from("rs456"),
        });
        report
    }

    #[rstest]
    fn test_table_starts_with_header(report: Report) {
        let table = report.table();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0][0], vec!["Original RSID"]);
        assert_eq!(table[1][0], vec!["rs123"]);
        assert_eq!(table[2][0], vec!["rs456"]);
        assert_eq!(report.failed_count(), 1);
    }

    #[rstest]
    fn test_write_csv(report: Report) {
        let mut buffer = Vec::new();
        report.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], REPORT_HEADER.join(","));
        assert_eq!(
            lines[1],
            "rs123,111;222,2001-01-01T00:00Z;2002-02-02T00:00Z,100;101,GENE1,,,,42,"
        );
        assert_eq!(lines[2], format!("rs456,{}", FAILED_FETCH_SENTINEL));
    }

    #[rstest]
    fn test_write_json(report: Report) {
        let mut buffer = Vec::new();
        report.write_json(&mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["header"].as_array().unwrap().len(), REPORT_HEADER.len());
        assert_eq!(value["rows"][0]["status"], "fetched");
        assert_eq!(value["rows"][0]["merges"][1]["merged_id"], "222");
        assert_eq!(value["rows"][1]["status"], "failed");
        assert_eq!(value["rows"][1]["rsid"], "rs456");
    }

    #[rstest]
    #[case("csv", ReportFormat::Csv)]
    #[case("JSON", ReportFormat::Json)]
    fn test_report_format_from_str(#[case] raw: &str, #[case] expected: ReportFormat) {
        assert_eq!(raw.parse::<ReportFormat>().unwrap(), expected);
    }

    #[rstest]
    fn test_unknown_report_format() {
        assert!("xlsx".parse::<ReportFormat>().is_err());
    }

    #[rstest]
    fn test_ledger_to_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested").join("ledger.csv");

        let mut ledger = MergedRsidLedger::new();
        ledger.push(vec!["rs123".to_string(), "111".to_string(), "222".to_string()]);
        ledger.push(vec!["rs456".to_string()]);
        ledger.to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "rs123,111,222\nrs456\n");
    }
}
