//! Repository for the `coop_summaries` table.

use chrono::Utc;
use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::summary::{CoOpSummary, CreateSummary};

const COLUMNS: &str = "id, student_id, position_id, text, submitted_at";

pub struct SummaryRepo;

impl SummaryRepo {
    /// Insert a summary, stamped with the current time. No duplicate check.
    pub async fn create(pool: &SqlitePool, input: &CreateSummary) -> Result<CoOpSummary, sqlx::Error> {
        let query = format!(
            "INSERT INTO coop_summaries (student_id, position_id, text, submitted_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CoOpSummary>(&query)
            .bind(input.student_id)
            .bind(input.position_id)
            .bind(&input.text)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_student(
        pool: &SqlitePool,
        student_id: DbId,
    ) -> Result<Vec<CoOpSummary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM coop_summaries WHERE student_id = ? ORDER BY id");
        sqlx::query_as::<_, CoOpSummary>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
