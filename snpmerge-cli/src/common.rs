//! Arguments shared by every subcommand that talks to dbSNP.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Arg, ArgMatches, value_parser};

use snpmerge_core::DiagnosticsSink;
use snpmerge_dbsnp::client::DbSnpClient;
use snpmerge_dbsnp::transport::UreqTransport;
use snpmerge_dbsnp::utils::get_default_diagnostics;

pub fn client_args() -> Vec<Arg> {
    vec![
        Arg::new("endpoint")
            .long("endpoint")
            .help("E-utilities efetch endpoint (defaults to $DBSNP_EUTILS_API or NCBI)"),
        Arg::new("api-key")
            .long("api-key")
            .help("NCBI API key appended to every request (defaults to $NCBI_API_KEY)"),
        Arg::new("max-attempts")
            .long("max-attempts")
            .value_parser(value_parser!(usize))
            .help("GET attempts per rsid before it is reported as failed [default: 11]"),
        Arg::new("timeout")
            .long("timeout")
            .value_parser(value_parser!(u64))
            .help("Timeout of each attempt, in seconds [default: 30]"),
        Arg::new("debug-folder")
            .long("debug-folder")
            .short('d')
            .help("Folder for diagnostics dumps (defaults to $SNPMERGE_DEBUG_DIR, off when unset)"),
    ]
}

pub fn diagnostics_from_matches(matches: &ArgMatches) -> DiagnosticsSink {
    matches
        .get_one::<String>("debug-folder")
        .map(|folder| DiagnosticsSink::Folder(PathBuf::from(folder)))
        .unwrap_or_else(get_default_diagnostics)
}

pub fn build_client(matches: &ArgMatches) -> Result<DbSnpClient<UreqTransport>> {
    let mut builder = DbSnpClient::builder()
        .with_diagnostics(diagnostics_from_matches(matches));

    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        builder = builder.with_endpoint(endpoint.clone());
    }
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        builder = builder.with_api_key(api_key.clone());
    }
    if let Some(max_attempts) = matches.get_one::<usize>("max-attempts") {
        builder = builder.with_max_attempts(*max_attempts);
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        builder = builder.with_timeout(Duration::from_secs(*timeout));
    }

    builder.finish()
}
