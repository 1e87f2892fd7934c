use std::io::{Write, stdout};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde_json::Value;

use snpmerge_core::models::{Report, Rsid};
use snpmerge_dbsnp::extract::extract_record;

use crate::common::build_client;

pub fn run_lookup(matches: &ArgMatches) -> Result<()> {
    let rsid = matches
        .get_one::<String>("rsid")
        .map(|r| Rsid::from(r.as_str()))
        .expect("An rsid is required.");

    let client = build_client(matches).context("Failed to create the dbSNP client")?;
    let document = client.fetch_document(&rsid);

    let mut out = stdout().lock();
    write_lookup(&mut out, &rsid, document.as_ref(), matches.get_flag("raw"))
}

///
/// Print the outcome of a single lookup.
///
/// With `raw` the fetched document is printed as is (`null` when nothing came back). Otherwise
/// the report row is printed as CSV with its header, followed by a `Merged rsids:` line.
///
pub fn write_lookup<W: Write>(
    out: &mut W,
    rsid: &Rsid,
    document: Option<&Value>,
    raw: bool,
) -> Result<()> {
    if raw {
        match document {
            Some(document) => writeln!(out, "{:#}", document)?,
            None => writeln!(out, "null")?,
        }
        return Ok(());
    }

    let (row, merged_rsids) = extract_record(rsid, document);

    let mut report = Report::new();
    report.push(row);
    report.write_csv(&mut *out)?;

    writeln!(out, "Merged rsids: {}", merged_rsids.join(", "))?;

    Ok(())
}
