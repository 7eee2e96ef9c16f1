use coop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `coop_summaries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CoOpSummary {
    pub id: DbId,
    pub student_id: DbId,
    pub position_id: DbId,
    pub text: String,
    pub submitted_at: Timestamp,
}

/// DTO for creating a summary.
#[derive(Debug)]
pub struct CreateSummary {
    pub student_id: DbId,
    pub position_id: DbId,
    pub text: String,
}
