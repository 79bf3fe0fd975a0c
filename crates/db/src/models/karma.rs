//! Karma ledger rows and leaderboard read models.

use serde::Serialize;
use sqlx::FromRow;

use feed_core::types::{DbId, Points, Timestamp};

/// A row from the append-only `karma_transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KarmaTransaction {
    pub id: DbId,
    pub user_id: DbId,
    pub points: Points,
    /// `POST_LIKE` or `COMMENT_LIKE`; see [`feed_core::like::KarmaSource`].
    pub source: String,
    pub created_at: Timestamp,
}

/// One leaderboard row: a user's karma summed over the window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KarmaEarner {
    pub user_id: DbId,
    #[serde(rename = "user")]
    pub username: String,
    pub total_karma: i64,
}

/// All-time karma for one user.
#[derive(Debug, Clone, Serialize)]
pub struct UserKarma {
    pub user_id: DbId,
    pub total_karma: i64,
}
