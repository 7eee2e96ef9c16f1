//! Faculty coordinator model and DTOs.

use coop_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `faculty_coordinators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacultyCoordinator {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub department_id: DbId,
}

/// DTO for creating a faculty coordinator.
#[derive(Debug)]
pub struct CreateFacultyCoordinator {
    pub full_name: String,
    pub email: String,
    pub department_id: DbId,
}
