//! HTTP client and request-building errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// These represent failures before or during transport; they are distinct
/// from status assertions, which act on a response that did arrive.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A path template could not be joined onto the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value was malformed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// Returns the HTTP status code if the underlying request error
    /// carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
