//! Session-cookie extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use coop_core::roles::Role;
use coop_core::types::DbId;
use coop_db::repositories::SessionRepo;

use crate::auth::cookie::{read_cookie, SESSION_COOKIE};
use crate::auth::session_token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated identity behind the session cookie.
///
/// Rejects with [`AppError::LoginRequired`] when the cookie is missing, the
/// session is unknown, or it has expired (expired rows are deleted on the
/// spot). Handlers normally use the role extractors in
/// [`super::rbac`] instead of this one.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Id of the row in the role's own table.
    pub account_id: DbId,
    pub role: Role,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = read_cookie(&parts.headers, SESSION_COOKIE).ok_or(AppError::LoginRequired)?;

        let session = SessionRepo::find_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or(AppError::LoginRequired)?;

        if session.expires_at <= Utc::now() {
            SessionRepo::delete(&state.pool, session.id).await?;
            tracing::debug!(session_id = session.id, "Expired session removed");
            return Err(AppError::LoginRequired);
        }

        let role: Role = session.role.parse().map_err(|_| AppError::LoginRequired)?;

        Ok(Identity {
            account_id: session.account_id,
            role,
        })
    }
}
