//! Repository for the append-only `karma_transactions` ledger.

use sqlx::PgPool;

use feed_core::leaderboard::LeaderboardWindow;
use feed_core::types::DbId;

use crate::models::karma::{KarmaEarner, KarmaTransaction, UserKarma};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, points, source, created_at";

/// Provides ledger reads and leaderboard aggregation.
///
/// Rows are only ever written by [`crate::repositories::LikeRepo::award`].
pub struct KarmaRepo;

impl KarmaRepo {
    /// Top karma earners over `[window.start, window.end)`.
    ///
    /// Ordered by total descending; equal totals are ordered by user id
    /// ascending so results are reproducible. Users without transactions in
    /// the window do not appear.
    pub async fn top_earners(
        pool: &PgPool,
        window: &LeaderboardWindow,
        limit: i64,
    ) -> Result<Vec<KarmaEarner>, sqlx::Error> {
        sqlx::query_as::<_, KarmaEarner>(
            "SELECT k.user_id, u.username, SUM(k.points)::BIGINT AS total_karma
             FROM karma_transactions k
             JOIN users u ON u.id = k.user_id
             WHERE k.created_at >= $1 AND k.created_at < $2
             GROUP BY k.user_id, u.username
             ORDER BY total_karma DESC, k.user_id ASC
             LIMIT $3",
        )
        .bind(window.start)
        .bind(window.end)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// All-time karma for one user; zero when the user has no transactions.
    pub async fn total_for_user(pool: &PgPool, user_id: DbId) -> Result<UserKarma, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(points), 0)::BIGINT FROM karma_transactions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(UserKarma {
            user_id,
            total_karma: row.0,
        })
    }

    /// A user's ledger entries, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<KarmaTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM karma_transactions
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, KarmaTransaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
