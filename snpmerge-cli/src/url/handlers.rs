use clap::ArgMatches;

use snpmerge_dbsnp::url::UrlBuilder;
use snpmerge_dbsnp::utils::{get_default_api_key, get_default_endpoint};

pub fn run_url(matches: &ArgMatches) {
    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(get_default_endpoint);
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(get_default_api_key);

    let builder = UrlBuilder::new(&endpoint, api_key);

    for rsid in matches
        .get_many::<String>("rsids")
        .expect("At least one rsid is required.")
    {
        println!("{}", builder.build(rsid.trim()));
    }
}
