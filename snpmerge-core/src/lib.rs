//! # Core data model for snpmerge.
//!
//! This crate holds everything about a merge-history report that does not touch the network:
//! the rsid, merge event and annotation types, the [`Report`](models::Report) and its
//! [`MergedRsidLedger`](models::MergedRsidLedger), readers for rsid input files and writers for
//! the finished report.
//!
pub mod consts;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod utils;

// re-expose core types
pub use consts::*;
pub use diagnostics::DiagnosticsSink;
pub use errors::*;
