//! Handlers for per-user karma.

use axum::extract::State;
use axum::response::IntoResponse;

use feed_core::error::CoreError;
use feed_core::types::DbId;
use feed_db::repositories::{KarmaRepo, UserRepo};

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a user exists.
async fn ensure_user_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| CoreError::not_found("User", id).into())
}

// ---------------------------------------------------------------------------
// GET /users/:id/karma
// ---------------------------------------------------------------------------

/// All-time karma total for a user.
pub async fn get_karma(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, id).await?;
    let karma = KarmaRepo::total_for_user(&state.pool, id).await?;
    Ok(DataResponse::ok(karma))
}

// ---------------------------------------------------------------------------
// GET /users/:id/karma/transactions
// ---------------------------------------------------------------------------

/// A user's karma ledger, newest first.
pub async fn list_karma_transactions(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, id).await?;
    let transactions = KarmaRepo::list_for_user(&state.pool, id).await?;

    tracing::debug!(user_id = id, count = transactions.len(), "Listed karma ledger");

    Ok(DataResponse::ok(transactions))
}
