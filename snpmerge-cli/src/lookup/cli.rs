use clap::{Arg, ArgAction, Command};

pub use snpmerge_dbsnp::consts::LOOKUP_CMD;

use crate::common::client_args;

pub fn create_lookup_cli() -> Command {
    Command::new(LOOKUP_CMD)
        .author("Databio")
        .about("Fetch a single rsid and print its report row.")
        .arg(Arg::new("rsid").required(true).help("rsid to fetch, e.g. rs6311"))
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .help("Print the fetched JSON record instead of the report row"),
        )
        .args(client_args())
}
