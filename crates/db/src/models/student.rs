//! Student model and DTOs.

use coop_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub credits_in_major: Option<i32>,
    pub gpa: Option<f64>,
    pub start_term: Option<String>,
    pub is_transfer: bool,
    pub completed_semesters: Option<i32>,
    pub department_id: Option<DbId>,
}

/// DTO for creating a student.
#[derive(Debug, Default)]
pub struct CreateStudent {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub major: Option<String>,
    pub credits_in_major: Option<i32>,
    pub gpa: Option<f64>,
    pub start_term: Option<String>,
    pub is_transfer: bool,
    pub completed_semesters: Option<i32>,
    pub department_id: Option<DbId>,
}
