//! Repository for the `students` table.

use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::student::{CreateStudent, Student};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, phone, major, credits_in_major, gpa, \
                       start_term, is_transfer, completed_semesters, department_id";

pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (full_name, email, phone, major, credits_in_major, gpa,
                                   start_term, is_transfer, completed_semesters, department_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.major)
            .bind(input.credits_in_major)
            .bind(input.gpa)
            .bind(&input.start_term)
            .bind(input.is_transfer)
            .bind(input.completed_semesters)
            .bind(input.department_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = ?");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by exact email match.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE email = ?");
        sqlx::query_as::<_, Student>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List the students belonging to a department, in insertion order.
    pub async fn list_by_department(
        pool: &SqlitePool,
        department_id: DbId,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE department_id = ? ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(department_id)
            .fetch_all(pool)
            .await
    }
}
