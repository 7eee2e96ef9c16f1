use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted, the config is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: coop_db::DbPool,
    /// Server configuration (session lifetime and cookie flags are read by
    /// the login handler).
    pub config: Arc<ServerConfig>,
}
