mod common;
mod fetch;
mod logging;
mod lookup;
mod url;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "snpmerge";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Fetch merge histories and gene annotations for rsids from NCBI dbSNP.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log every request and failed attempt"),
        )
        .subcommand(fetch::cli::create_fetch_cli())
        .subcommand(lookup::cli::create_lookup_cli())
        .subcommand(url::cli::create_url_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init_logging(&matches);

    match matches.subcommand() {
        //
        // FETCH
        //
        Some((fetch::cli::FETCH_CMD, matches)) => {
            fetch::handlers::run_fetch(matches)?;
        }

        //
        // LOOKUP
        //
        Some((lookup::cli::LOOKUP_CMD, matches)) => {
            lookup::handlers::run_lookup(matches)?;
        }

        //
        // URL
        //
        Some((url::cli::URL_CMD, matches)) => {
            url::handlers::run_url(matches);
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["snpmerge", "url", "rs1", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
