//! Login session model and DTOs.

use coop_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct LoginSession {
    pub id: DbId,
    pub token_hash: String,
    pub account_id: DbId,
    /// Role tag; one of `coop_core::roles::VALID_ROLES`.
    pub role: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a session.
pub struct CreateSession {
    pub token_hash: String,
    pub account_id: DbId,
    pub role: String,
    pub expires_at: Timestamp,
}
