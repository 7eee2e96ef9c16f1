//! Repository for the `faculty_coordinators` table.

use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::faculty::{CreateFacultyCoordinator, FacultyCoordinator};

const COLUMNS: &str = "id, full_name, email, department_id";

pub struct FacultyRepo;

impl FacultyRepo {
    /// Insert a new faculty coordinator, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFacultyCoordinator,
    ) -> Result<FacultyCoordinator, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculty_coordinators (full_name, email, department_id)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FacultyCoordinator>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(input.department_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<FacultyCoordinator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculty_coordinators WHERE id = ?");
        sqlx::query_as::<_, FacultyCoordinator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a coordinator by exact email match.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<FacultyCoordinator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculty_coordinators WHERE email = ?");
        sqlx::query_as::<_, FacultyCoordinator>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
