//! The comment resource DTO.

use serde::{Deserialize, Serialize};

/// A comment attached to a post.
///
/// `id` is assigned by the server and therefore absent on create requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    /// Id of the post this comment belongs to.
    pub post_id: u64,
    /// Server-assigned comment id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name of the commenter.
    pub name: String,
    /// Commenter email address.
    pub email: String,
    /// Comment text.
    pub body: String,
}
