//! Query parameter types for API handlers.

use feed_core::types::Timestamp;
use serde::Deserialize;

/// Leaderboard window and size (`?since=&until=&limit=`).
///
/// Bounds are RFC 3339 timestamps. Missing values fall back to the trailing
/// 24 hours and the default limit; see `feed_core::leaderboard`.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub since: Option<Timestamp>,
    pub until: Option<Timestamp>,
    pub limit: Option<i64>,
}
