//! Route definitions for per-user karma.
//!
//! ```text
//! GET /{id}/karma                  get_karma
//! GET /{id}/karma/transactions     list_karma_transactions
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes, mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/karma", get(users::get_karma))
        .route(
            "/{id}/karma/transactions",
            get(users::list_karma_transactions),
        )
}
