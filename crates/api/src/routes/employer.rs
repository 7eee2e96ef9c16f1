//! Route definitions for the `/employer` dashboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::employer;
use crate::state::AppState;

/// Routes mounted at `/employer`.
///
/// ```text
/// GET  /dashboard                     -> dashboard
/// POST /dashboard                     -> post_position
/// GET  /positions/{id}/applications   -> list_applications
/// POST /offers                        -> record_offer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/dashboard",
            get(employer::dashboard).post(employer::post_position),
        )
        .route(
            "/positions/{id}/applications",
            get(employer::list_applications),
        )
        .route("/offers", post(employer::record_offer))
}
