//! dbSNP client implementation.
//!
//! This module provides the [`DbSnpClient`] type and its builder: URL construction and the
//! retrying fetcher wired together, ready to resolve rsids one at a time.

use std::time::Duration;

use anyhow::Result;
use serde_json::Value;

use snpmerge_core::DiagnosticsSink;
use snpmerge_core::models::{ReportRow, Rsid};

use super::consts::{DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_MAX_ATTEMPTS};
use super::extract::extract_record;
use super::fetch::Fetcher;
use super::transport::{Transport, UreqTransport};
use super::url::UrlBuilder;
use super::utils::{get_default_api_key, get_default_diagnostics, get_default_endpoint};

/// Builder for constructing a [`DbSnpClient`] with custom configuration.
///
/// Anything left unset falls back to the environment (endpoint, API key, diagnostics folder)
/// or to the crate defaults (attempt cap, per-attempt timeout).
///
/// # Examples
///
/// ```rust,no_run
/// use snpmerge_dbsnp::client::DbSnpClient;
/// use std::time::Duration;
///
/// # fn main() -> anyhow::Result<()> {
/// let client = DbSnpClient::builder()
///     .with_max_attempts(5)
///     .with_timeout(Duration::from_secs(10))
///     .finish()?;
/// let (row, merged) = client.fetch_rsid(&"rs6311".into());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct DbSnpClientBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
    max_attempts: Option<usize>,
    timeout: Option<Duration>,
    diagnostics: Option<DiagnosticsSink>,
}

impl DbSnpClientBuilder {
    /// Creates a new, empty DbSnpClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `efetch` endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the NCBI API key appended to every request.
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets how many GET attempts are made per rsid.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Sets the timeout of each individual attempt.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets where diagnostics dumps go.
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsSink) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Consumes the builder and creates a DbSnpClient talking to dbSNP over HTTP.
    pub fn finish(self) -> Result<DbSnpClient<UreqTransport>> {
        let timeout = self.timeout.unwrap_or(DEFAULT_ATTEMPT_TIMEOUT);
        if timeout.is_zero() {
            anyhow::bail!("The per-attempt timeout must be greater than zero");
        }
        let transport = UreqTransport::new(timeout);
        self.finish_with_transport(transport)
    }

    /// Consumes the builder and creates a DbSnpClient on top of the given transport.
    pub fn finish_with_transport<T: Transport>(self, transport: T) -> Result<DbSnpClient<T>> {
        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            anyhow::bail!("At least one fetch attempt is required");
        }

        let endpoint = self.endpoint.unwrap_or_else(get_default_endpoint);
        let api_key = self.api_key.or_else(get_default_api_key);
        let diagnostics = self.diagnostics.unwrap_or_else(get_default_diagnostics);

        Ok(DbSnpClient {
            url_builder: UrlBuilder::new(&endpoint, api_key),
            fetcher: Fetcher::new(transport, max_attempts, diagnostics),
        })
    }
}

/// Client resolving rsids against dbSNP.
///
/// Each rsid goes through URL construction, the retrying fetch and field extraction, and
/// comes back as a [`ReportRow`] plus its merged-rsid list. Fetch failures never surface as
/// errors; they degrade the row to [`ReportRow::Failed`].
pub struct DbSnpClient<T: Transport = UreqTransport> {
    url_builder: UrlBuilder,
    fetcher: Fetcher<T>,
}

impl DbSnpClient<UreqTransport> {
    /// Creates a new builder for constructing a [`DbSnpClient`].
    pub fn builder() -> DbSnpClientBuilder {
        DbSnpClientBuilder::default()
    }
}

impl<T: Transport> DbSnpClient<T> {
    pub fn url_builder(&self) -> &UrlBuilder {
        &self.url_builder
    }

    pub fn diagnostics(&self) -> &DiagnosticsSink {
        self.fetcher.diagnostics()
    }

    pub fn max_attempts(&self) -> usize {
        self.fetcher.max_attempts()
    }

    /// Fetch the raw refsnp document of an rsid, `None` when every attempt failed.
    pub fn fetch_document(&self, rsid: &Rsid) -> Option<Value> {
        let url = self.url_builder.build(rsid.as_str());
        self.fetcher.fetch(&url)
    }

    /// Fetch an rsid and extract its report row and merged-rsid list.
    pub fn fetch_rsid(&self, rsid: &Rsid) -> (ReportRow, Vec<String>) {
        let document = self.fetch_document(rsid);
        extract_record(rsid, document.as_ref())
    }
}
