//! Repository for the `applications` table.

use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::application::{
    Application, CreateApplication, PositionApplicant, StudentApplication,
};

const COLUMNS: &str = "id, position_id, student_id, applied_at, status";

pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert an application unless this student already applied to this
    /// position.
    ///
    /// Relies on `uq_applications_student_position`, so concurrent requests
    /// cannot both succeed. Returns `None` when the pair already exists.
    pub async fn create_if_absent(
        pool: &SqlitePool,
        input: &CreateApplication<'_>,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (position_id, student_id, applied_at, status)
             VALUES (?, ?, ?, ?)
             ON CONFLICT (student_id, position_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.position_id)
            .bind(input.student_id)
            .bind(input.applied_at)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Whether the student has applied to the position.
    pub async fn exists(
        pool: &SqlitePool,
        student_id: DbId,
        position_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM applications WHERE student_id = ? AND position_id = ?",
        )
        .bind(student_id)
        .bind(position_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0 > 0)
    }

    /// A student's own applications, oldest first.
    pub async fn list_for_student(
        pool: &SqlitePool,
        student_id: DbId,
    ) -> Result<Vec<StudentApplication>, sqlx::Error> {
        sqlx::query_as::<_, StudentApplication>(
            "SELECT a.id, a.position_id, p.title AS position_title, a.applied_at, a.status
             FROM applications a
             JOIN positions p ON p.id = a.position_id
             WHERE a.student_id = ?
             ORDER BY a.id",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }

    /// Applications to one position, oldest first.
    pub async fn list_for_position(
        pool: &SqlitePool,
        position_id: DbId,
    ) -> Result<Vec<PositionApplicant>, sqlx::Error> {
        sqlx::query_as::<_, PositionApplicant>(
            "SELECT a.id, a.student_id, s.full_name AS student_name, s.email AS student_email,
                    s.major AS student_major, a.applied_at, a.status
             FROM applications a
             JOIN students s ON s.id = a.student_id
             WHERE a.position_id = ?
             ORDER BY a.id",
        )
        .bind(position_id)
        .fetch_all(pool)
        .await
    }
}
