//! Liveness endpoint, mounted next to the page routes.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest applied migration, if the store could report one.
    pub schema_version: Option<i64>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = coop_db::health_check(&state.pool).await.is_ok();
    let schema_version = if db_healthy {
        coop_db::schema_version(&state.pool).await.ok().flatten()
    } else {
        None
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
