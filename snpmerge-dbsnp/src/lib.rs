//! # dbSNP merge-history fetching.
//!
//! Resolves rsids against the NCBI E-utilities `efetch` endpoint one at a time: build the
//! request URL, GET it with a bounded retry loop, and extract the merge history and gene
//! annotations of the returned JSON record into a [`ReportRow`](snpmerge_core::models::ReportRow).
//!
//! ```rust,no_run
//! use snpmerge_core::DiagnosticsSink;
//! use snpmerge_core::utils::read_rsids;
//! use snpmerge_dbsnp::{DbSnpClient, fetch_all_rsids, rsid_progress_bar};
//!
//! # fn main() -> anyhow::Result<()> {
//! let rsids = read_rsids("rsids.csv", None, &DiagnosticsSink::Disabled)?;
//! let client = DbSnpClient::builder().finish()?;
//! let pb = rsid_progress_bar(rsids.len(), true)?;
//! let (report, ledger) = fetch_all_rsids(&client, &rsids, &pb);
//! report.to_file("report.csv", snpmerge_core::models::ReportFormat::Csv)?;
//! # Ok(())
//! # }
//! ```
pub mod batch;
pub mod client;
pub mod consts;
pub mod extract;
pub mod fetch;
pub mod transport;
pub mod url;
pub mod utils;

// re-exports
pub use batch::*;
pub use client::{DbSnpClient, DbSnpClientBuilder};
pub use extract::extract_record;
pub use fetch::Fetcher;
pub use transport::{Transport, UreqTransport};
pub use url::{UrlBuilder, redact_api_key};
