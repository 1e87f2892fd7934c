use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use snpmerge_core::models::{MergedRsidLedger, Report, Rsid};

use super::client::DbSnpClient;
use super::transport::Transport;

///
/// Build the progress bar used while fetching `total` rsids.
///
/// # Arguments
/// - total: number of rsids in the batch
/// - visible: draw the bar on stderr, or keep it hidden
pub fn rsid_progress_bar(total: usize, visible: bool) -> anyhow::Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:70}] {pos}/{len} rsids ({percent}%) {msg}")?
            .progress_chars("=> "),
    );

    Ok(pb)
}

///
/// Resolve every rsid in order and assemble the report and the merged-rsid ledger.
///
/// Rsids are handled strictly one after another. An rsid that cannot be fetched gets a
/// failed row and the batch carries on. Row `i` of the report (after the header) and entry
/// `i` of the ledger both belong to `rsids[i]`.
///
/// # Arguments
/// - client: the dbSNP client used for every rsid
/// - rsids: the rsids to resolve, in output order
/// - pb: progress bar advanced once per rsid
pub fn fetch_all_rsids<T: Transport>(
    client: &DbSnpClient<T>,
    rsids: &[Rsid],
    pb: &ProgressBar,
) -> (Report, MergedRsidLedger) {
    let mut report = Report::new();
    let mut ledger = MergedRsidLedger::new();

    for rsid in rsids {
        pb.set_message(rsid.to_string());

        let (row, merged_rsids) = client.fetch_rsid(rsid);
        report.push(row);
        ledger.push(merged_rsids);

        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    info!(
        "Fetched {} rsids, {} failed",
        report.len(),
        report.failed_count()
    );

    (report, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_hidden_progress_bar() {
        let pb = rsid_progress_bar(10, false).unwrap();
        assert!(pb.is_hidden());
    }

    #[rstest]
    fn test_visible_progress_bar_length() {
        let pb = rsid_progress_bar(10, true).unwrap();
        assert_eq!(pb.length(), Some(10));
    }
}
