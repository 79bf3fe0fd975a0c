//! Handler for the karma leaderboard.

use axum::extract::State;
use axum::response::IntoResponse;

use feed_core::leaderboard::{clamp_limit, LeaderboardWindow};
use feed_db::repositories::KarmaRepo;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::query::LeaderboardParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Top karma earners, by default over the trailing 24 hours.
pub async fn top_earners(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let window = LeaderboardWindow::resolve(params.since, params.until, chrono::Utc::now())?;
    let limit = clamp_limit(params.limit);

    let earners = KarmaRepo::top_earners(&state.pool, &window, limit).await?;

    tracing::debug!(
        start = %window.start,
        end = %window.end,
        limit,
        count = earners.len(),
        "Computed leaderboard"
    );

    Ok(DataResponse::ok(earners))
}
