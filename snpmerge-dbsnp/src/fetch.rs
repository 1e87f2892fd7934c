//! GET with a bounded retry loop.
//!
//! A URL is requested until its body parses to a non-empty JSON document or the attempt cap is
//! reached. Transport errors, error statuses and unparseable bodies all count as "no data yet";
//! there is no backoff between attempts.

use serde_json::Value;
use tracing::{debug, error};

use snpmerge_core::DiagnosticsSink;

use super::consts::DEFAULT_MAX_ATTEMPTS;
use super::transport::Transport;
use super::url::redact_api_key;

/// Whether a parsed document carries no data: `null`, `{}` or `[]`.
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

pub struct Fetcher<T: Transport> {
    transport: T,
    max_attempts: usize,
    diagnostics: DiagnosticsSink,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, max_attempts: usize, diagnostics: DiagnosticsSink) -> Self {
        Fetcher {
            transport,
            max_attempts: max_attempts.max(1),
            diagnostics,
        }
    }

    pub fn with_transport(transport: T) -> Self {
        Self::new(transport, DEFAULT_MAX_ATTEMPTS, DiagnosticsSink::Disabled)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn diagnostics(&self) -> &DiagnosticsSink {
        &self.diagnostics
    }

    ///
    /// Fetch `url` and parse the body as JSON, retrying until a non-empty document arrives.
    ///
    /// Every attempt reads into a fresh buffer, so bodies of failed attempts never leak into
    /// the next parse.
    ///
    /// # Returns
    /// - the parsed document, or `None` once `max_attempts` attempts have failed
    pub fn fetch(&self, url: &str) -> Option<Value> {
        let shown_url = redact_api_key(url);
        let mut document = None;

        for attempt in 0..self.max_attempts {
            match self.attempt(url) {
                Ok(value) if !is_empty_document(&value) => {
                    document = Some(value);
                    break;
                }
                Ok(_) => debug!(
                    "Attempt {} for {} returned an empty document",
                    attempt, shown_url
                ),
                Err(e) => debug!("Attempt {} for {} failed: {:#}", attempt, shown_url, e),
            }
        }

        if document.is_none() {
            error!(
                "Failed to retrieve data from {} after {} attempts",
                shown_url, self.max_attempts
            );
        }

        self.diagnostics.record_json(document.as_ref());
        document
    }

    fn attempt(&self, url: &str) -> anyhow::Result<Value> {
        let body = self.transport.get(url)?;
        Ok(serde_json::from_str(&body)?)
    }
}
