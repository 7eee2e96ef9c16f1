//! Position model, DTOs, and the joined listing row.

use coop_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `positions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Position {
    pub id: DbId,
    pub employer_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub hours_per_week: Option<i32>,
    pub location: Option<String>,
    pub majors_of_interest: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
}

/// A position joined with the employer contact and company that posted it.
///
/// Returned by the student-facing listing so the filter columns are visible
/// alongside each result.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PositionListing {
    pub id: DbId,
    pub employer_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub hours_per_week: Option<i32>,
    pub location: Option<String>,
    pub majors_of_interest: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub employer_name: String,
    pub company_name: String,
}

/// DTO for creating a position.
#[derive(Debug)]
pub struct CreatePosition {
    pub employer_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub hours_per_week: Option<i32>,
    pub location: Option<String>,
    pub majors_of_interest: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
}
