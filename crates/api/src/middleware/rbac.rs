//! Role extractors.
//!
//! Each extractor wraps [`Identity`], rejects sessions of any other role, and
//! loads the account row the session points at. A wrong role or a vanished
//! account rejects with [`AppError::LoginRequired`], which sends the browser
//! back to the login page.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use coop_core::roles::Role;
use coop_db::models::employer::Employer;
use coop_db::models::faculty::FacultyCoordinator;
use coop_db::models::student::Student;
use coop_db::repositories::{EmployerRepo, FacultyRepo, StudentRepo};

use super::session::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Resolve the session and insist on `role`.
async fn identity_with_role(
    parts: &mut Parts,
    state: &AppState,
    role: Role,
) -> Result<Identity, AppError> {
    let identity = Identity::from_request_parts(parts, state).await?;
    if identity.role != role {
        tracing::debug!(
            expected = %role,
            actual = %identity.role,
            account_id = identity.account_id,
            "Session role mismatch"
        );
        return Err(AppError::LoginRequired);
    }
    Ok(identity)
}

/// Requires a student session.
///
/// ```ignore
/// async fn dashboard(RequireStudent(student): RequireStudent) -> AppResult<Response> {
///     // student is the logged-in student's row
/// }
/// ```
pub struct RequireStudent(pub Student);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identity_with_role(parts, state, Role::Student).await?;
        let student = StudentRepo::find_by_id(&state.pool, identity.account_id)
            .await?
            .ok_or(AppError::LoginRequired)?;
        Ok(RequireStudent(student))
    }
}

/// Requires an employer session.
pub struct RequireEmployer(pub Employer);

impl FromRequestParts<AppState> for RequireEmployer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identity_with_role(parts, state, Role::Employer).await?;
        let employer = EmployerRepo::find_by_id(&state.pool, identity.account_id)
            .await?
            .ok_or(AppError::LoginRequired)?;
        Ok(RequireEmployer(employer))
    }
}

/// Requires a faculty coordinator session.
pub struct RequireFaculty(pub FacultyCoordinator);

impl FromRequestParts<AppState> for RequireFaculty {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identity_with_role(parts, state, Role::Faculty).await?;
        let faculty = FacultyRepo::find_by_id(&state.pool, identity.account_id)
            .await?
            .ok_or(AppError::LoginRequired)?;
        Ok(RequireFaculty(faculty))
    }
}
