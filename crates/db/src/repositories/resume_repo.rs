//! Repository for the `resumes` table.

use chrono::Utc;
use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::resume::Resume;

const COLUMNS: &str = "id, student_id, file_url, updated_at";

pub struct ResumeRepo;

impl ResumeRepo {
    /// Attach a resume link to a student, stamped with the current time.
    pub async fn create(
        pool: &SqlitePool,
        student_id: DbId,
        file_url: &str,
    ) -> Result<Resume, sqlx::Error> {
        let query = format!(
            "INSERT INTO resumes (student_id, file_url, updated_at)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resume>(&query)
            .bind(student_id)
            .bind(file_url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List a student's resumes, most recently updated first.
    pub async fn list_for_student(
        pool: &SqlitePool,
        student_id: DbId,
    ) -> Result<Vec<Resume>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resumes WHERE student_id = ? ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Resume>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
