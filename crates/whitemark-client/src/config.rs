//! Connection settings for the backend API.

use std::time::Duration;

use url::Url;

use crate::transport::{TransportError, TransportResult};

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the backend settings API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, including any path prefix.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parse a base URL into a configuration with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> TransportResult<Self> {
        let base_url = base_url
            .parse::<Url>()
            .map_err(|source| TransportError::InvalidUrl { source })?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_url_with_default_timeout() {
        let config = ClientConfig::new("http://localhost:7070/api").expect("valid base URL");
        assert_eq!(config.base_url.as_str(), "http://localhost:7070/api");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = ClientConfig::new("not a url").expect_err("invalid base URL");
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }

    #[test]
    fn timeout_can_be_overridden() {
        let config = ClientConfig::new("http://localhost:7070")
            .expect("valid base URL")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
