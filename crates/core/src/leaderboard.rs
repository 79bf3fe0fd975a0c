//! Karma leaderboard window and limit rules.
//!
//! The aggregation itself runs in SQL; this module decides which half-open
//! interval `[start, end)` and how many rows are asked for.

use chrono::Duration;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Default trailing window length in hours.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Default number of earners returned.
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 5;

/// Upper bound on the number of earners returned.
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// Half-open time interval used to sum karma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl LeaderboardWindow {
    /// Build a window, rejecting empty or inverted intervals.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, CoreError> {
        if start >= end {
            return Err(CoreError::Validation(format!(
                "Leaderboard window start ({start}) must be before end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// The [`DEFAULT_WINDOW_HOURS`] ending at `now`.
    pub fn trailing(now: Timestamp) -> Self {
        Self {
            start: now - Duration::hours(DEFAULT_WINDOW_HOURS),
            end: now,
        }
    }

    /// Resolve optional bounds against `now`.
    ///
    /// A missing end defaults to `now`; a missing start defaults to
    /// [`DEFAULT_WINDOW_HOURS`] before the end.
    pub fn resolve(
        start: Option<Timestamp>,
        end: Option<Timestamp>,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        let end = end.unwrap_or(now);
        let start = start.unwrap_or_else(|| end - Duration::hours(DEFAULT_WINDOW_HOURS));
        Self::new(start, end)
    }

    /// Whether `at` falls inside `[start, end)`.
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at < self.end
    }
}

/// Apply the default and clamp to `1..=MAX_LEADERBOARD_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT)
}
