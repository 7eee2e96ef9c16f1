//! Route definitions for the `/student` dashboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// ```text
/// GET  /dashboard             -> dashboard (?employer=&major=)
/// POST /apply/{position_id}   -> apply
/// GET  /summary               -> summary_page
/// POST /summary               -> submit_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(student::dashboard))
        .route("/apply/{position_id}", post(student::apply))
        .route(
            "/summary",
            get(student::summary_page).post(student::submit_summary),
        )
}
