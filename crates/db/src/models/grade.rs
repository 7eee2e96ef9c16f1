//! Grade model and joined read model.

use coop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `grades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Grade {
    pub id: DbId,
    pub student_id: DbId,
    pub position_id: DbId,
    pub grade_value: String,
    pub graded_by: DbId,
    pub graded_at: Timestamp,
}

/// A grade as listed on the grading coordinator's dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GradeRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub position_id: DbId,
    pub position_title: String,
    pub grade_value: String,
    pub graded_at: Timestamp,
}

/// DTO for creating a grade.
#[derive(Debug)]
pub struct CreateGrade<'a> {
    pub student_id: DbId,
    pub position_id: DbId,
    pub grade_value: &'a str,
    pub graded_by: DbId,
}
