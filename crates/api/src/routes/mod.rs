pub mod health;
pub mod leaderboard;
pub mod likes;
pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts                                  list (public), create (auth)
/// /posts/{id}                             detail with comment tree (public)
/// /posts/{id}/comments                    create comment (auth)
///
/// /like                                   like a post or comment (auth)
///
/// /leaderboard                            top karma earners (public)
///
/// /users/{id}/karma                       all-time karma total (public)
/// /users/{id}/karma/transactions          karma ledger (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/posts", posts::router())
        .merge(likes::router())
        .merge(leaderboard::router())
        .nest("/users", users::router())
}
