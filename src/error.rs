//! Error types for qgjob

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can end an invocation early
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing arguments; raised before any network call
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Connection, DNS or timeout failure
    #[error("could not reach job service at {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx answer from the job service
    #[error("job service returned {status}: {detail}")]
    Server { status: StatusCode, detail: String },

    /// Malformed response or any other failure
    #[error("unexpected response from job service: {0}")]
    Unexpected(String),

    /// Base URL cannot address the job endpoints
    #[error("invalid job service configuration: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Server`] from a non-2xx status and its raw body.
    ///
    /// Prefers the `detail` field of a JSON body (the shape the job service
    /// uses for 404 and validation errors), then the raw body, then the
    /// status reason.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        Error::Server {
            status,
            detail: extract_detail(status, body),
        }
    }

    /// Classify a transport-level `reqwest` failure.
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            Error::Transport {
                url: url.to_string(),
                source: err,
            }
        } else {
            Error::Unexpected(err.to_string())
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn extract_detail(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(trimmed) {
        match map.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(detail) if !detail.is_null() => return detail.to_string(),
            _ => {}
        }
    }

    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("no response body")
        .to_string()
}
