//! Repository for the `companies` table.

use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::company::{Company, CreateCompany};

const COLUMNS: &str = "id, name, location, website";

pub struct CompanyRepo;

impl CompanyRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, location, website)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = ?");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
