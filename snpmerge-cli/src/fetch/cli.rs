use clap::{Arg, ArgAction, Command};

pub use snpmerge_dbsnp::consts::{DEFAULT_REPORT_STEM, FETCH_CMD};

use crate::common::client_args;

pub fn create_fetch_cli() -> Command {
    Command::new(FETCH_CMD)
        .author("Databio")
        .about("Fetch every rsid of an input file from dbSNP and write a merge-history report.")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Delimited file whose first column holds rsids (.gz accepted, '-' for stdin)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path of the report [default: snpmerge_report.csv, or .json with --format json]"),
        )
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .short('l')
                .help("Also write each rsid with all rsids merged into it to this path"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["csv", "json"])
                .default_value("csv")
                .help("Report format"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .default_value(",")
                .help("Field delimiter of the input file, a single character or 'tab'"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Do not draw the progress bar"),
        )
        .args(client_args())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_fetch_defaults() {
        let matches = create_fetch_cli()
            .try_get_matches_from(["fetch", "rsids.csv"])
            .unwrap();

        assert_eq!(matches.get_one::<String>("input").unwrap(), "rsids.csv");
        assert_eq!(matches.get_one::<String>("output"), None);
        assert_eq!(matches.get_one::<String>("format").unwrap(), "csv");
        assert_eq!(matches.get_one::<usize>("max-attempts"), None);
        assert!(!matches.get_flag("no-progress"));
    }

    #[rstest]
    fn test_fetch_overrides() {
        let matches = create_fetch_cli()
            .try_get_matches_from([
                "fetch",
                "rsids.tsv.gz",
                "--format",
                "json",
                "--delimiter",
                "tab",
                "--max-attempts",
                "3",
                "--timeout",
                "5",
                "--ledger",
                "ledger.csv",
                "--no-progress",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>("format").unwrap(), "json");
        assert_eq!(matches.get_one::<usize>("max-attempts"), Some(&3));
        assert_eq!(matches.get_one::<u64>("timeout"), Some(&5));
        assert_eq!(matches.get_one::<String>("ledger").unwrap(), "ledger.csv");
        assert!(matches.get_flag("no-progress"));
    }

    #[rstest]
    fn test_fetch_rejects_unknown_format() {
        let result = create_fetch_cli().try_get_matches_from(["fetch", "rsids.csv", "--format", "xlsx"]);
        assert!(result.is_err());
    }
}
