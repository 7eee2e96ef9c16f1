//! Repository for the `employers` table.

use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::employer::{CreateEmployer, Employer};

const COLUMNS: &str = "id, company_id, full_name, email, phone";

pub struct EmployerRepo;

impl EmployerRepo {
    /// Insert a new employer contact, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateEmployer) -> Result<Employer, sqlx::Error> {
        let query = format!(
            "INSERT INTO employers (company_id, full_name, email, phone)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employer>(&query)
            .bind(input.company_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Employer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employers WHERE id = ?");
        sqlx::query_as::<_, Employer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employer by exact email match.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Employer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employers WHERE email = ?");
        sqlx::query_as::<_, Employer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
