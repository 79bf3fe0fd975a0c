//! Like entity model and the result of awarding a like.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use feed_core::like::{KarmaSource, LikeTarget};
use feed_core::types::{DbId, Points, Timestamp};

/// A row from the `likes` table.
///
/// Exactly one of `post_id` / `comment_id` is set (`ck_likes_single_target`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub post_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl Like {
    /// The liked entity. `None` only if the row violates the single-target check.
    pub fn target(&self) -> Option<LikeTarget> {
        LikeTarget::from_ids(self.post_id, self.comment_id).ok()
    }
}

/// Request body for `POST /like`: exactly one id must be supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LikeRequest {
    pub post_id: Option<DbId>,
    pub comment_id: Option<DbId>,
}

/// Outcome of a successful like: the like row and the karma it earned.
#[derive(Debug, Clone, Serialize)]
pub struct LikeAward {
    pub like_id: DbId,
    pub user_id: DbId,
    pub target: LikeTarget,
    /// Author of the liked post or comment, credited with the karma.
    pub recipient_id: DbId,
    pub points: Points,
    pub source: KarmaSource,
    pub created_at: Timestamp,
}
