//! Validated responses.
//!
//! A [`CheckedResponse`] pairs a received HTTP response with the assertion
//! helpers the endpoint wrappers rely on: [`expect_status`] for the status
//! check and [`json`] for typed extraction of the body.
//!
//! [`expect_status`]: CheckedResponse::expect_status
//! [`json`]: CheckedResponse::json

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ValidationError};

/// A response received from the server, ready for assertion and extraction.
///
/// The body is fully buffered; a `CheckedResponse` is consumed immediately
/// by the calling test, not retained.
#[derive(Debug)]
pub struct CheckedResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl CheckedResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the HTTP status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Asserts that the response status matches `expected`.
    ///
    /// This is the sole error behavior of the endpoint wrappers: on a
    /// mismatch the response body is folded into the error for diagnostics
    /// and the calling test fails immediately. No retry, no recovery.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::StatusMismatch`] if the status differs.
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, ApiError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ApiError::StatusMismatch {
                expected: expected.as_u16(),
                actual: self.status.as_u16(),
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }

    /// Deserializes the body as JSON into `T`.
    ///
    /// ## Errors
    ///
    /// Returns a validation error if the body is empty or not valid JSON
    /// for the target type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if self.body.is_empty() {
            return Err(ValidationError::EmptyBody.into());
        }
        serde_json::from_slice(&self.body)
            .map_err(|e| ValidationError::JsonParse(e).into())
    }

    /// Returns the body as a UTF-8 string.
    ///
    /// ## Errors
    ///
    /// Returns a validation error if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String, ApiError> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| ValidationError::InvalidUtf8(e.to_string()).into())
    }
}
