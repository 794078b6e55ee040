// Shared transport configuration for building reqwest::Client instances.
//
// Timeout and user agent live here so callers never touch the
// reqwest builder directly.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("dustloop/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.into(),
        }
    }
}

impl TransportConfig {
    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))
    }
}
