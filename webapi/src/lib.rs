//! Async REST client primitives for endpoint test automation.
//!
//! The `webapi` crate provides the shared plumbing that resource-specific
//! endpoint wrappers are built on:
//!
//! - **Request specifications**: a reusable bundle of base URL, default
//!   headers, timeout, and auth settings ([`RequestSpec`])
//! - **Generic verb methods**: `get`/`post`/`put`/`delete` with `{param}`
//!   path templates ([`WebClient`])
//! - **Validated responses**: status assertion plus typed JSON extraction
//!   ([`CheckedResponse`])
//! - **Layered error handling**: structured errors for different failure
//!   modes ([`ApiError`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use reqwest::StatusCode;
//! use url::Url;
//! use webapi::{RequestSpec, WebClient};
//!
//! #[derive(serde::Deserialize)]
//! struct User { id: u64, name: String }
//!
//! let spec = RequestSpec::builder(Url::parse("https://api.example.com")?).build();
//! let client = WebClient::new(spec)?;
//!
//! let user: User = client
//!     .get("/users/{id}", &[("id", "1")])
//!     .await?
//!     .expect_status(StatusCode::OK)?
//!     .json()?;
//! ```

pub mod client;
pub mod error;
pub mod method;
pub mod response;
pub mod spec;

// Re-exports for convenience
pub use client::WebClient;
pub use error::{ApiError, ClientError, ValidationError};
pub use method::RestMethod;
pub use response::CheckedResponse;
pub use spec::{AuthScheme, RequestSpec, RequestSpecBuilder};

// The status-code enumeration consumed for assertions.
pub use reqwest::StatusCode;
