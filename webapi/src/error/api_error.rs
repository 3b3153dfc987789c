//! Top-level error type.

use super::{ClientError, ValidationError};
use thiserror::Error;

/// Top-level error type for all endpoint operations.
///
/// This enum aggregates the error categories, enabling unified error
/// handling while preserving the ability to match on specific kinds.
/// [`StatusMismatch`](Self::StatusMismatch) is the assertion failure a
/// wrapper raises when the server answers with a status code other than
/// the expected one; it is always fatal to the calling test, never
/// caught or retried inside the wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client errors (network failures, invalid headers or URLs).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response extraction errors (parse failures, empty bodies).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The actual HTTP status code differed from the expected one.
    #[error("expected HTTP {expected}, got HTTP {actual}: {body}")]
    StatusMismatch {
        /// The status code the caller expected.
        expected: u16,
        /// The status code the server returned.
        actual: u16,
        /// The response body, for diagnostics.
        body: String,
    },
}

impl ApiError {
    /// Returns `true` if this is a status assertion failure.
    pub fn is_status_mismatch(&self) -> bool {
        matches!(self, Self::StatusMismatch { .. })
    }

    /// Returns the actual status code if this is a status assertion failure.
    pub fn actual_status(&self) -> Option<u16> {
        match self {
            Self::StatusMismatch { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}
