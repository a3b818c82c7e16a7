//! Client configuration

use reqwest::Url;
use std::time::Duration;

/// Job service the client talks to when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Upper bound for a single request, including connect
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the [`JobClient`](crate::JobClient) needs to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the job service (e.g. `http://localhost:8000`)
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // Constant is a valid absolute URL.
        Self::new(parse_api_url(DEFAULT_API_URL).unwrap())
    }
}

/// Parse a base URL for the job service.
///
/// Only `http` and `https` URLs that can carry path segments are accepted.
pub fn parse_api_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL '{}': {}", raw, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "unsupported scheme '{}', expected http or https",
            url.scheme()
        ));
    }
    if url.cannot_be_a_base() {
        return Err(format!("'{}' cannot be used as a base URL", raw));
    }

    Ok(url)
}
