//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use feed_core::comment_tree::FlatComment;
use feed_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
}

/// A comment joined with its author's username, as fed to the tree builder.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<CommentWithAuthor> for FlatComment {
    fn from(row: CommentWithAuthor) -> Self {
        FlatComment {
            id: row.id,
            parent_id: row.parent_id,
            author: row.author,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

/// DTO for creating a comment on a post.
///
/// The post comes from the path and the author from the caller identity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub parent_id: Option<DbId>,
}
