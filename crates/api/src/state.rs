use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once in `main` and closed on shutdown.
    pub pool: filmoteka_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
