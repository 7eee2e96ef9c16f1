//! Route definitions for login and logout.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET  /         -> login_page
/// POST /         -> login
/// GET  /logout   -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}
