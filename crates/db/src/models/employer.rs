//! Employer model and DTOs.

use coop_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `employers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employer {
    pub id: DbId,
    pub company_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// DTO for creating an employer contact.
#[derive(Debug)]
pub struct CreateEmployer {
    pub company_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}
