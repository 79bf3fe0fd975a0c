//! Route definitions for likes.
//!
//! ```text
//! POST /like    like
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::likes;
use crate::state::AppState;

/// Like routes, merged at the API root.
pub fn router() -> Router<AppState> {
    Router::new().route("/like", post(likes::like))
}
