//! HTTP handlers, one module per resource.

pub mod leaderboard;
pub mod likes;
pub mod posts;
pub mod users;

use feed_core::error::CoreError;
use feed_core::types::DbId;
use feed_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};

/// Reject callers whose token names a user this database does not know.
///
/// Tokens come from an external identity provider, so a valid signature does
/// not guarantee the user row exists.
pub(crate) async fn ensure_known_caller(pool: &sqlx::PgPool, user_id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(pool, user_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown user".into())))
}
