use coop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `resumes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resume {
    pub id: DbId,
    pub student_id: DbId,
    pub file_url: String,
    pub updated_at: Timestamp,
}
