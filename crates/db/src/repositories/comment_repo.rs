//! Repository for the `comments` table.

use sqlx::PgPool;

use feed_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, post_id, author_id, parent_id, content, created_at";

/// Provides create and read operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment on `post_id`, returning the created row.
    ///
    /// A `parent_id` belonging to another post violates
    /// `fk_comments_parent_same_post`.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        author_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, author_id, parent_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(author_id)
            .bind(input.parent_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every comment on a post with its author's username.
    ///
    /// Ordered by creation time, then id, which is the order the comment
    /// tree builder expects.
    pub async fn list_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.parent_id, u.username AS author, c.content, c.created_at
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }
}
