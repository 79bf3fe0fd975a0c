//! Like targets and the karma awarded for them.
//!
//! A like applies to exactly one post or exactly one comment. The wire format
//! carries two optional ids; [`LikeTarget::from_ids`] turns that pair into a
//! single tagged value so the rest of the system never sees an ambiguous
//! target.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, Points};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Karma credited to a post's author for each like on the post.
pub const POST_LIKE_POINTS: Points = 5;

/// Karma credited to a comment's author for each like on the comment.
pub const COMMENT_LIKE_POINTS: Points = 1;

/// Error message when a like request names no target.
pub const MISSING_TARGET_MESSAGE: &str = "post_id or comment_id is required";

/// Error message when a like request names both a post and a comment.
pub const AMBIGUOUS_TARGET_MESSAGE: &str = "post_id and comment_id are mutually exclusive";

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// The entity a like applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum LikeTarget {
    Post(DbId),
    Comment(DbId),
}

impl LikeTarget {
    /// Resolve a target from the optional id pair of a like request.
    ///
    /// Exactly one of the ids must be present.
    pub fn from_ids(post_id: Option<DbId>, comment_id: Option<DbId>) -> Result<Self, CoreError> {
        match (post_id, comment_id) {
            (Some(id), None) => Ok(LikeTarget::Post(id)),
            (None, Some(id)) => Ok(LikeTarget::Comment(id)),
            (None, None) => Err(CoreError::Validation(MISSING_TARGET_MESSAGE.to_string())),
            (Some(_), Some(_)) => Err(CoreError::Validation(AMBIGUOUS_TARGET_MESSAGE.to_string())),
        }
    }

    /// The id of the post or comment.
    pub fn id(self) -> DbId {
        match self {
            LikeTarget::Post(id) | LikeTarget::Comment(id) => id,
        }
    }

    /// Human-readable entity name, used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            LikeTarget::Post(_) => "Post",
            LikeTarget::Comment(_) => "Comment",
        }
    }

    /// The karma source recorded when this target is liked.
    pub fn karma_source(self) -> KarmaSource {
        match self {
            LikeTarget::Post(_) => KarmaSource::PostLike,
            LikeTarget::Comment(_) => KarmaSource::CommentLike,
        }
    }

    /// The not-found error for this target.
    pub fn not_found(self) -> CoreError {
        CoreError::not_found(self.entity_name(), self.id())
    }
}

impl std::fmt::Display for LikeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.entity_name(), self.id())
    }
}

// ---------------------------------------------------------------------------
// Karma source
// ---------------------------------------------------------------------------

/// Why a karma transaction was recorded.
///
/// Stored as text in `karma_transactions.source`; see [`KarmaSource::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KarmaSource {
    PostLike,
    CommentLike,
}

impl KarmaSource {
    /// Points credited to the target's author.
    pub fn points(self) -> Points {
        match self {
            KarmaSource::PostLike => POST_LIKE_POINTS,
            KarmaSource::CommentLike => COMMENT_LIKE_POINTS,
        }
    }

    /// Database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            KarmaSource::PostLike => "POST_LIKE",
            KarmaSource::CommentLike => "COMMENT_LIKE",
        }
    }
}

impl std::fmt::Display for KarmaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
