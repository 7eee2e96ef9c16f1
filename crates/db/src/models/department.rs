use coop_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
}
