//! Repository for the `posts` table and the feed read model.

use sqlx::PgPool;

use feed_core::types::DbId;

use crate::models::post::{CreatePost, FeedPost, Post};

/// Column list for plain `posts` rows.
const COLUMNS: &str = "id, author_id, content, created_at";

/// Select list for [`FeedPost`]: author name joined, likes counted from rows.
const FEED_SELECT: &str = "SELECT p.id, p.author_id, u.username AS author, p.content, p.created_at, \
        (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count \
     FROM posts p \
     JOIN users u ON u.id = p.author_id";

/// Provides create and read operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post authored by `author_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (author_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every post newest first, with author name and like count.
    ///
    /// Posts created in the same instant are ordered by id, newest first.
    pub async fn list_feed(pool: &PgPool) -> Result<Vec<FeedPost>, sqlx::Error> {
        let query = format!("{FEED_SELECT} ORDER BY p.created_at DESC, p.id DESC");
        sqlx::query_as::<_, FeedPost>(&query).fetch_all(pool).await
    }

    /// Fetch one post in feed shape. Returns `None` if it does not exist.
    pub async fn find_feed_post(pool: &PgPool, id: DbId) -> Result<Option<FeedPost>, sqlx::Error> {
        let query = format!("{FEED_SELECT} WHERE p.id = $1");
        sqlx::query_as::<_, FeedPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
