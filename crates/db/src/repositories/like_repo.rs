//! Repository for the `likes` table and the like/karma award transaction.

use sqlx::error::ErrorKind;
use sqlx::PgPool;

use feed_core::like::LikeTarget;
use feed_core::types::DbId;

use crate::models::like::{Like, LikeAward};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, post_id, comment_id, created_at";

/// Prefix of the per-(user, target) uniqueness constraints on `likes`.
const LIKE_UNIQUE_PREFIX: &str = "uq_likes_";

/// Why awarding a like failed. Any failure leaves no rows behind.
#[derive(Debug, thiserror::Error)]
pub enum AwardError {
    /// The liked post or comment does not exist.
    #[error("Like target not found: {0}")]
    TargetNotFound(LikeTarget),

    /// The user already liked this target.
    #[error("Already liked")]
    AlreadyLiked,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AwardError {
    /// Map an insert failure on `likes`, recognising the uniqueness constraints.
    fn from_like_insert(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.kind() == ErrorKind::UniqueViolation
                && db_err
                    .constraint()
                    .is_some_and(|c| c.starts_with(LIKE_UNIQUE_PREFIX))
            {
                return AwardError::AlreadyLiked;
            }
        }
        AwardError::Database(err)
    }
}

/// Provides the like award transaction and like lookups.
pub struct LikeRepo;

impl LikeRepo {
    /// Record that `user_id` likes `target` and credit the target's author.
    ///
    /// Runs in one transaction:
    /// 1. resolve the target's author, key-share locking the row so it cannot
    ///    be deleted before the like lands;
    /// 2. insert the like (a uniqueness violation means [`AwardError::AlreadyLiked`]);
    /// 3. append the karma transaction;
    /// 4. commit.
    ///
    /// There is no prior "already liked?" read. Two racing calls for the same
    /// (user, target) are serialised by the unique constraint: one commits,
    /// the other fails on insert and its transaction is rolled back on drop.
    pub async fn award(
        pool: &PgPool,
        user_id: DbId,
        target: LikeTarget,
    ) -> Result<LikeAward, AwardError> {
        let mut tx = pool.begin().await?;

        let owner_query = match target {
            LikeTarget::Post(_) => "SELECT author_id FROM posts WHERE id = $1 FOR KEY SHARE",
            LikeTarget::Comment(_) => "SELECT author_id FROM comments WHERE id = $1 FOR KEY SHARE",
        };
        let recipient_id = sqlx::query_scalar::<_, DbId>(owner_query)
            .bind(target.id())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AwardError::TargetNotFound(target))?;

        let (post_id, comment_id) = match target {
            LikeTarget::Post(id) => (Some(id), None),
            LikeTarget::Comment(id) => (None, Some(id)),
        };
        let query = format!(
            "INSERT INTO likes (user_id, post_id, comment_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let like = sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(post_id)
            .bind(comment_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AwardError::from_like_insert)?;

        let source = target.karma_source();
        let points = source.points();
        sqlx::query(
            "INSERT INTO karma_transactions (user_id, points, source)
             VALUES ($1, $2, $3)",
        )
        .bind(recipient_id)
        .bind(points)
        .bind(source.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if recipient_id == user_id {
            tracing::debug!(user_id, ?target, "User liked their own content");
        }

        Ok(LikeAward {
            like_id: like.id,
            user_id,
            target,
            recipient_id,
            points,
            source,
            created_at: like.created_at,
        })
    }

    /// Find the like `user_id` placed on `target`, if any.
    pub async fn find_by_user_and_target(
        pool: &PgPool,
        user_id: DbId,
        target: LikeTarget,
    ) -> Result<Option<Like>, sqlx::Error> {
        let column = match target {
            LikeTarget::Post(_) => "post_id",
            LikeTarget::Comment(_) => "comment_id",
        };
        let query = format!("SELECT {COLUMNS} FROM likes WHERE user_id = $1 AND {column} = $2");
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(pool)
            .await
    }

    /// Count the likes on a target.
    pub async fn count_for_target(pool: &PgPool, target: LikeTarget) -> Result<i64, sqlx::Error> {
        let query = match target {
            LikeTarget::Post(_) => "SELECT COUNT(*) FROM likes WHERE post_id = $1",
            LikeTarget::Comment(_) => "SELECT COUNT(*) FROM likes WHERE comment_id = $1",
        };
        let row: (i64,) = sqlx::query_as(query)
            .bind(target.id())
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
