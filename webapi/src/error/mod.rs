//! Layered error types for the client crate.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all endpoint operations
//! - [`ClientError`] - HTTP client and request-building errors
//! - [`ValidationError`] - Response body extraction errors

mod api_error;
mod client_error;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use validation_error::ValidationError;
