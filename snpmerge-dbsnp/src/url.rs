//! Request URLs for dbSNP records.

use std::borrow::Cow;

use tracing::debug;

use super::consts::{DEFAULT_EUTILS_ENDPOINT, EFETCH_QUERY_PREFIX, EFETCH_QUERY_SUFFIX};

///
/// Builds `efetch` URLs for rsids against a fixed endpoint.
///
/// The rsid is pasted between the query prefix and suffix unchanged. Nothing is validated
/// or escaped; a malformed rsid produces a URL the service rejects.
///
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    endpoint: String,
    api_key: Option<String>,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_EUTILS_ENDPOINT, None)
    }
}

impl UrlBuilder {
    pub fn new(endpoint: &str, api_key: Option<String>) -> Self {
        UrlBuilder {
            endpoint: endpoint.to_string(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    ///
    /// Build the request URL for one rsid.
    ///
    /// # Arguments
    /// - rsid: the accession as read from the input
    ///
    /// # Returns
    /// - `<endpoint>?db=snp&id=<rsid>&rettype=json&retmode=text`, followed by `&api_key=<key>`
    ///   when a key is configured
    pub fn build(&self, rsid: &str) -> String {
        let mut url = format!(
            "{}{}{}{}",
            self.endpoint, EFETCH_QUERY_PREFIX, rsid, EFETCH_QUERY_SUFFIX
        );

        if let Some(key) = &self.api_key {
            url.push_str("&api_key=");
            url.push_str(key);
        }

        debug!("{}", redact_api_key(&url));
        url
    }
}

const API_KEY_PARAM: &str = "api_key=";

///
/// Mask the value of every `api_key` query parameter so a URL can be logged or shown in an
/// error message.
///
pub fn redact_api_key(url: &str) -> Cow<'_, str> {
    if !url.contains(API_KEY_PARAM) {
        return Cow::Borrowed(url);
    }

    let (base, query) = match url.split_once('?') {
        Some(parts) => parts,
        None => return Cow::Borrowed(url),
    };

    let query = query
        .split('&')
        .map(|param| match param.strip_prefix(API_KEY_PARAM) {
            Some(_) => "api_key=***",
            None => param,
        })
        .collect::<Vec<_>>()
        .join("&");

    Cow::Owned(format!("{}?{}", base, query))
}
