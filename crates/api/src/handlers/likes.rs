//! Handler for awarding likes.

use axum::extract::State;
use axum::response::IntoResponse;

use feed_core::like::LikeTarget;
use feed_db::models::like::LikeRequest;
use feed_db::repositories::LikeRepo;

use crate::error::AppResult;
use crate::extract::OptionalJson;
use crate::handlers::ensure_known_caller;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /like
// ---------------------------------------------------------------------------

/// Like a post or a comment and credit its author with karma.
///
/// The body may be omitted; it then names no target and fails validation.
/// The target is checked before any database access. Duplicate likes are
/// rejected by the store inside the award transaction; nothing is retried.
pub async fn like(
    State(state): State<AppState>,
    auth: AuthUser,
    OptionalJson(body): OptionalJson<LikeRequest>,
) -> AppResult<impl IntoResponse> {
    let target = LikeTarget::from_ids(body.post_id, body.comment_id)?;

    ensure_known_caller(&state.pool, auth.user_id).await?;

    let award = LikeRepo::award(&state.pool, auth.user_id, target).await?;

    tracing::info!(
        like_id = award.like_id,
        user_id = auth.user_id,
        %target,
        recipient_id = award.recipient_id,
        points = award.points,
        "Like awarded"
    );

    Ok(DataResponse::created(award))
}
