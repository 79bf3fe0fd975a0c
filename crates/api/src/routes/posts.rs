//! Route definitions for posts and comments.
//!
//! ```text
//! GET  /                  list_posts
//! POST /                  create_post
//! GET  /{id}              get_post
//! POST /{id}/comments     create_comment
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Post routes, mounted at `/posts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", get(posts::get_post))
        .route("/{id}/comments", post(posts::create_comment))
}
