//! Repository for the `grades` table.

use chrono::Utc;
use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::grade::{CreateGrade, Grade, GradeRecord};

const COLUMNS: &str = "id, student_id, position_id, grade_value, graded_by, graded_at";

pub struct GradeRepo;

impl GradeRepo {
    /// Record a grade, stamped with the current time.
    pub async fn create(pool: &SqlitePool, input: &CreateGrade<'_>) -> Result<Grade, sqlx::Error> {
        let query = format!(
            "INSERT INTO grades (student_id, position_id, grade_value, graded_by, graded_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(input.student_id)
            .bind(input.position_id)
            .bind(input.grade_value)
            .bind(input.graded_by)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Grades recorded by one faculty coordinator, oldest first.
    pub async fn list_by_grader(
        pool: &SqlitePool,
        faculty_id: DbId,
    ) -> Result<Vec<GradeRecord>, sqlx::Error> {
        sqlx::query_as::<_, GradeRecord>(
            "SELECT g.id, g.student_id, s.full_name AS student_name, g.position_id,
                    p.title AS position_title, g.grade_value, g.graded_at
             FROM grades g
             JOIN students s ON s.id = g.student_id
             JOIN positions p ON p.id = g.position_id
             WHERE g.graded_by = ?
             ORDER BY g.id",
        )
        .bind(faculty_id)
        .fetch_all(pool)
        .await
    }
}
