//! Route definitions for the `/faculty` dashboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::faculty;
use crate::state::AppState;

/// Routes mounted at `/faculty`.
///
/// ```text
/// GET  /dashboard   -> dashboard
/// POST /grades      -> record_grade
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(faculty::dashboard))
        .route("/grades", post(faculty::record_grade))
}
