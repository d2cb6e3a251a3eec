//! Comment entity model and DTOs.

use bbs_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full comment row from the `comments` table.
///
/// A comment belongs to exactly one post and is only ever mutated through
/// the owning [`Post`] aggregate.
///
/// [`Post`]: crate::models::post::Post
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Comment {
    /// Replace the content and refresh `updated_at`.
    pub fn update(&mut self, content: &str, now: Timestamp) {
        self.content = content.to_string();
        self.updated_at = now;
    }
}

/// DTO for creating a new comment.
#[derive(Debug)]
pub struct CreateComment {
    pub post_id: DbId,
    pub author_id: Option<DbId>,
    pub content: String,
}

/// Comment representation for API responses. The author is not exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: DbId,
    pub create_date: Timestamp,
    pub modify_date: Timestamp,
    pub content: String,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            create_date: comment.created_at,
            modify_date: comment.updated_at,
            content: comment.content.clone(),
        }
    }
}
