use std::env;
use std::path::PathBuf;

use snpmerge_core::DiagnosticsSink;

use super::consts::{
    DBSNP_EUTILS_API_ENV, DEFAULT_EUTILS_ENDPOINT, NCBI_API_KEY_ENV, SNPMERGE_DEBUG_DIR_ENV,
};

/// Get default E-utilities endpoint from environment variable
///
/// # Returns
/// - endpoint the rsid query is appended to
pub fn get_default_endpoint() -> String {
    env::var(DBSNP_EUTILS_API_ENV).unwrap_or_else(|_| DEFAULT_EUTILS_ENDPOINT.to_string())
}

/// Get the NCBI API key from environment variable, if one is set
pub fn get_default_api_key() -> Option<String> {
    env::var(NCBI_API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Get the diagnostics sink from environment variable: a folder sink when the variable
/// names a folder, otherwise disabled
pub fn get_default_diagnostics() -> DiagnosticsSink {
    match env::var(SNPMERGE_DEBUG_DIR_ENV) {
        Ok(val) if !val.trim().is_empty() => DiagnosticsSink::Folder(PathBuf::from(val)),
        _ => DiagnosticsSink::Disabled,
    }
}
