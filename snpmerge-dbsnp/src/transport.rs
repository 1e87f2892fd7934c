//! The single HTTP GET the fetcher depends on.

use std::time::Duration;

use anyhow::{Context, Result};
use ureq::Agent;

use super::url::redact_api_key;

///
/// Performs one GET and returns the response body as text.
///
/// Any failure (connection, timeout, HTTP error status, unreadable body) is an `Err`; the
/// fetcher does not tell them apart.
///
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
}

///
/// Blocking [`Transport`] backed by a `ureq` agent. Each call is an independent request
/// bounded by the configured timeout.
///
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        UreqTransport {
            agent: Agent::new_with_config(config),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<String> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .with_context(|| format!("Failed to GET {}", redact_api_key(url)))?;

        response
            .body_mut()
            .read_to_string()
            .with_context(|| {
                format!("Failed to read response body for {}", redact_api_key(url))
            })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}
