//! Response body extraction errors.

use thiserror::Error;

/// Errors during typed extraction of a response body.
///
/// These occur when a caller asks for a typed object out of a validated
/// response and the body does not cooperate. They propagate untouched;
/// the wrappers never attempt recovery.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON deserialization failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Empty response body when content was expected.
    #[error("empty response body")]
    EmptyBody,

    /// Response body is not valid UTF-8.
    #[error("invalid UTF-8 in response body: {0}")]
    InvalidUtf8(String),
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}
