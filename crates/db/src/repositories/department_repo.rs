//! Repository for the `departments` table.

use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::department::Department;

pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the created row.
    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Department, sqlx::Error> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
