//! Typed endpoint wrappers for a JSONPlaceholder-style REST API.
//!
//! Each wrapper maps one REST resource to CRUD helper methods that issue
//! requests through a shared [`WebClient`](webapi::WebClient), assert on
//! the expected status code, and deserialize the body into a typed DTO.
//!
//! Every operation comes as a pair: the happy-path form defaults to the
//! success status for that operation and returns the typed object
//! (`create`, `update`, `get_by_id`, `get_all`, `delete`); the `try_` form
//! takes an explicit expected status and returns the raw
//! [`CheckedResponse`](webapi::CheckedResponse), so negative-path tests can
//! issue the same request without a deserialization attempt that would
//! fail on an error body.
//!
//! ## Example
//!
//! ```rust,ignore
//! use url::Url;
//! use webapi::{RequestSpec, StatusCode};
//! use placeholder::endpoints::CommentEndpoint;
//! use placeholder::models::CommentDto;
//!
//! let spec = RequestSpec::builder(Url::parse("https://example.typicode.com")?).build();
//! let comments = CommentEndpoint::new(spec)?;
//!
//! let created = comments.create(&CommentDto::default()).await?;
//! let missing = comments.try_get_by_id(999_999, StatusCode::NOT_FOUND).await?;
//! assert_eq!(missing.status(), StatusCode::NOT_FOUND);
//! ```

pub mod endpoints;
pub mod models;

pub use endpoints::{CommentEndpoint, UserEndpoint};
pub use models::{Address, CommentDto, Company, Geo, UserDto};
