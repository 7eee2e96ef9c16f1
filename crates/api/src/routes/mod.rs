pub mod auth;
pub mod employer;
pub mod faculty;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the portal's page routes.
///
/// Route tree:
///
/// ```text
/// /                                        login page (GET), login (POST)
/// /logout                                  logout (GET)
///
/// /student/dashboard                       positions + own applications
/// /student/apply/{position_id}             apply (POST)
/// /student/summary                         offers (GET), submit summary (POST)
///
/// /employer/dashboard                      own positions (GET), post position (POST)
/// /employer/positions/{id}/applications    applicants for an own position
/// /employer/offers                         record offer (POST)
///
/// /faculty/dashboard                       department students + grades given
/// /faculty/grades                          record grade (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/student", student::router())
        .nest("/employer", employer::router())
        .nest("/faculty", faculty::router())
}
