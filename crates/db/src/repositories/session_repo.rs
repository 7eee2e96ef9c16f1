//! Repository for the `sessions` table.

use chrono::Utc;
use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::session::{CreateSession, LoginSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token_hash, account_id, role, expires_at, created_at";

pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSession) -> Result<LoginSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (token_hash, account_id, role, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginSession>(&query)
            .bind(&input.token_hash)
            .bind(input.account_id)
            .bind(&input.role)
            .bind(input.expires_at)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a session by its token hash, expired or not.
    ///
    /// Callers compare `expires_at` themselves so an expired row can be
    /// cleaned up on the spot.
    pub async fn find_by_token_hash(
        pool: &SqlitePool,
        hash: &str,
    ) -> Result<Option<LoginSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE token_hash = ?");
        sqlx::query_as::<_, LoginSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a single session. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the session holding this token hash, if any.
    pub async fn delete_by_token_hash(pool: &SqlitePool, hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session past its expiry. Returns the count removed.
    pub async fn delete_expired(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
