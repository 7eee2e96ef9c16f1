use coop_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
}

/// DTO for creating a company.
#[derive(Debug)]
pub struct CreateCompany {
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
}
