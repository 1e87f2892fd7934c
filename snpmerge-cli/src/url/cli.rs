use clap::{Arg, Command};

pub use snpmerge_dbsnp::consts::URL_CMD;

pub fn create_url_cli() -> Command {
    Command::new(URL_CMD)
        .author("Databio")
        .about("Print the efetch request URL of each rsid without fetching it.")
        .arg(
            Arg::new("rsids")
                .required(true)
                .num_args(1..)
                .help("One or more rsids"),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .help("E-utilities efetch endpoint (defaults to $DBSNP_EUTILS_API or NCBI)"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .help("NCBI API key appended to every request (defaults to $NCBI_API_KEY)"),
        )
}
