//! DTOs for the resources under test.

mod comment;
mod user;

pub use comment::CommentDto;
pub use user::{Address, Company, Geo, UserDto};
