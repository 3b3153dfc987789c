//! Resource endpoint wrappers.
//!
//! One wrapper per REST resource. Each holds its own [`WebClient`]
//! (composition, no shared base type) and exposes only the
//! resource-specific operations.
//!
//! [`WebClient`]: webapi::WebClient

mod comment;
mod user;

pub use comment::CommentEndpoint;
pub use user::UserEndpoint;
