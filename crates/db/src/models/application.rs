//! Application model and joined read models.

use coop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub position_id: DbId,
    pub student_id: DbId,
    pub applied_at: Timestamp,
    pub status: String,
}

/// One of a student's own applications, with the position title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentApplication {
    pub id: DbId,
    pub position_id: DbId,
    pub position_title: String,
    pub applied_at: Timestamp,
    pub status: String,
}

/// An application to one position, with the applicant's contact details.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PositionApplicant {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub student_email: String,
    pub student_major: Option<String>,
    pub applied_at: Timestamp,
    pub status: String,
}

/// DTO for creating an application.
#[derive(Debug)]
pub struct CreateApplication<'a> {
    pub position_id: DbId,
    pub student_id: DbId,
    pub applied_at: Timestamp,
    pub status: &'a str,
}
