//! Constants for talking to dbSNP and for the command line surface.
//!
//! This module defines the E-utilities endpoint and query layout, retry defaults,
//! environment variable names, the JSON paths read from each record and the command strings
//! used by the CLI.

use std::time::Duration;

// Environment variable names

/// Environment variable name for overriding the E-utilities `efetch` endpoint.
///
/// # Example
///
/// ```bash
/// export DBSNP_EUTILS_API=https://eutils.be-md.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi
/// ```
pub const DBSNP_EUTILS_API_ENV: &str = "DBSNP_EUTILS_API";

/// Environment variable holding an NCBI API key, appended to every request when set.
pub const NCBI_API_KEY_ENV: &str = "NCBI_API_KEY";

/// Environment variable naming a folder for diagnostics dumps. Diagnostics are off when unset.
pub const SNPMERGE_DEBUG_DIR_ENV: &str = "SNPMERGE_DEBUG_DIR";

// Request layout

/// Default E-utilities `efetch` endpoint.
pub const DEFAULT_EUTILS_ENDPOINT: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Query placed between the endpoint and the rsid.
pub const EFETCH_QUERY_PREFIX: &str = "?db=snp&id=";

/// Query placed after the rsid, asking for the JSON record rendered as text.
pub const EFETCH_QUERY_SUFFIX: &str = "&rettype=json&retmode=text";

// Retry policy

/// Number of GET attempts made for one URL before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 11;

/// Timeout applied to each individual attempt.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

// Record layout

/// Array of historical merges of the record.
pub const MERGES_POINTER: &str = "/dbsnp1_merges";

pub const MERGED_RSID_KEY: &str = "merged_rsid";
pub const MERGE_DATE_KEY: &str = "merge_date";
pub const REVISION_KEY: &str = "revision";

/// First gene of the first assembly annotation of the first allele annotation.
pub const GENE_POINTER: &str =
    "/primary_snapshot_data/allele_annotations/0/assembly_annotation/0/genes/0";

// Paths below are relative to GENE_POINTER.
pub const LOCUS_POINTER: &str = "/locus";
pub const GENE_NAME_POINTER: &str = "/name";
pub const ORIENTATION_POINTER: &str = "/orientation";
pub const SEQUENCE_ONTOLOGY_POINTER: &str = "/rnas/0/sequence_ontology/0/name";

/// Position of the allele in the current release, read from the document root.
pub const POSITION_POINTER: &str = "/present_obs_movements/0/allele_in_cur_release/position";

// Command-line interface command names

/// Subcommand fetching every rsid of an input file into a report.
pub const FETCH_CMD: &str = "fetch";

/// Subcommand fetching a single rsid.
pub const LOOKUP_CMD: &str = "lookup";

/// Subcommand printing request URLs without fetching them.
pub const URL_CMD: &str = "url";

/// Default report path of the `fetch` subcommand, without its extension. The extension follows
/// the report format.
pub const DEFAULT_REPORT_STEM: &str = "snpmerge_report";
