//! Route definitions for the karma leaderboard.
//!
//! ```text
//! GET /leaderboard    top_earners (?since, ?until, ?limit)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// Leaderboard routes, merged at the API root.
pub fn router() -> Router<AppState> {
    Router::new().route("/leaderboard", get(leaderboard::top_earners))
}
