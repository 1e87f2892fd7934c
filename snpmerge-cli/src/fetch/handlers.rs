use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::warn;

use snpmerge_core::models::ReportFormat;
use snpmerge_core::utils::{parse_delimiter, read_rsids};
use snpmerge_dbsnp::{fetch_all_rsids, rsid_progress_bar};

use super::cli::DEFAULT_REPORT_STEM;
use crate::common::build_client;
use crate::logging::{attach_progress_bar, detach_progress_bar};

/// Report path used when `--output` is not given, e.g. `snpmerge_report.json` for JSON.
pub fn default_report_path(format: ReportFormat) -> String {
    format!("{}.{}", DEFAULT_REPORT_STEM, format)
}

pub fn run_fetch(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an rsid file is required.");

    let format: ReportFormat = matches
        .get_one::<String>("format")
        .map(|f| f.parse())
        .transpose()?
        .unwrap_or(ReportFormat::Csv);

    let output = matches
        .get_one::<String>("output")
        .cloned()
        .unwrap_or_else(|| default_report_path(format));

    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(|d| parse_delimiter(d))
        .transpose()?;

    let client = build_client(matches).context("Failed to create the dbSNP client")?;

    let rsids = read_rsids(input, delimiter, client.diagnostics())
        .with_context(|| format!("There was an error reading rsids from {}", input))?;

    if rsids.is_empty() {
        warn!("No rsids found in {}", input);
    }

    let pb = rsid_progress_bar(rsids.len(), !matches.get_flag("no-progress"))?;
    attach_progress_bar(&pb);
    let (report, ledger) = fetch_all_rsids(&client, &rsids, &pb);
    detach_progress_bar();

    report
        .to_file(&output, format)
        .with_context(|| format!("There was an error writing the report to {}", output))?;
    eprintln!("Report written to {}", output);

    if let Some(ledger_path) = matches.get_one::<String>("ledger") {
        ledger
            .to_file(ledger_path)
            .with_context(|| format!("There was an error writing the ledger to {}", ledger_path))?;
        eprintln!("Merged rsids written to {}", ledger_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(ReportFormat::Csv, "snpmerge_report.csv")]
    #[case(ReportFormat::Json, "snpmerge_report.json")]
    fn test_default_report_path_follows_format(
        #[case] format: ReportFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(default_report_path(format), expected);
    }
}
