use std::sync::Arc;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: feed_db::DbPool,
    /// Read by [`crate::middleware::auth::AuthUser`] for the token secret.
    pub config: Arc<ServerConfig>,
}
