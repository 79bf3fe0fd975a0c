//! Post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use feed_core::types::{DbId, Timestamp};

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// A post as shown in the feed: author name resolved, likes counted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedPost {
    pub id: DbId,
    pub author_id: DbId,
    /// Author username.
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
    pub like_count: i64,
}

/// DTO for creating a post. The author is the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub content: String,
}
