//! Handlers for the login page and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use coop_core::notice::Notice;
use coop_core::roles::{Role, VALID_ROLES};
use coop_core::types::DbId;
use coop_db::models::session::CreateSession;
use coop_db::repositories::{EmployerRepo, FacultyRepo, SessionRepo, StudentRepo};
use coop_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{expired_cookie, read_cookie, session_cookie, SESSION_COOKIE};
use crate::auth::session_token::{generate_session_token, hash_session_token};
use crate::error::AppResult;
use crate::flash::Flash;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /`.
///
/// Both fields default to empty so a partial form is treated as a failed
/// lookup rather than a rejected request.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Data for the login view.
#[derive(Debug, Serialize)]
pub struct LoginView {
    /// Role tags the form accepts.
    pub roles: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
pub async fn login_page(flash: Flash) -> Response {
    flash.page(LoginView { roles: VALID_ROLES })
}

/// POST /
///
/// Look the email up in the table for the declared role. No password is
/// checked. On a match a new session replaces any session the browser
/// already held; on a miss the browser is sent back with a notice.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    flash: Flash,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let account = match input.role.parse::<Role>() {
        Ok(role) => find_account(&state.pool, role, &input.email)
            .await?
            .map(|id| (role, id)),
        Err(_) => None,
    };

    let Some((role, account_id)) = account else {
        tracing::info!(role = %input.role, "Login failed: no matching account");
        return Ok(flash.redirect("/", Notice::UserNotFound));
    };

    if let Some(previous) = read_cookie(&headers, SESSION_COOKIE) {
        SessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(previous)).await?;
    }

    let (token, token_hash) = generate_session_token();
    let session_config = &state.config.session;
    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            token_hash,
            account_id,
            role: role.as_str().to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(session_config.ttl_hours),
        },
    )
    .await?;

    tracing::info!(session_id = session.id, account_id, role = %role, "Login succeeded");

    let cookie = session_cookie(&token, session_config.ttl_secs(), session_config.cookie_secure);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to(role.dashboard_path()),
    )
        .into_response())
}

/// GET /logout
///
/// Always succeeds, with or without a live session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = read_cookie(&headers, SESSION_COOKIE) {
        let removed =
            SessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(token)).await?;
        tracing::info!(removed, "Logout");
    }

    Ok((
        AppendHeaders([(SET_COOKIE, expired_cookie(SESSION_COOKIE))]),
        Redirect::to("/"),
    )
        .into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Exact-match email lookup in the table that backs `role`.
async fn find_account(pool: &DbPool, role: Role, email: &str) -> AppResult<Option<DbId>> {
    let id = match role {
        Role::Student => StudentRepo::find_by_email(pool, email).await?.map(|s| s.id),
        Role::Employer => EmployerRepo::find_by_email(pool, email).await?.map(|e| e.id),
        Role::Faculty => FacultyRepo::find_by_email(pool, email).await?.map(|f| f.id),
    };
    Ok(id)
}
