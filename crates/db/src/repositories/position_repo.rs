//! Repository for the `positions` table.
//!
//! The student listing joins through `employers` to `companies` so that the
//! employer filter can match either the contact's name or the company name.

use coop_core::search::PositionFilter;
use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::position::{CreatePosition, Position, PositionListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, employer_id, title, description, weeks, hours_per_week, location, \
                       majors_of_interest, required_skills, preferred_skills";

pub struct PositionRepo;

impl PositionRepo {
    /// Insert a new position, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePosition) -> Result<Position, sqlx::Error> {
        let query = format!(
            "INSERT INTO positions (employer_id, title, description, weeks, hours_per_week,
                                    location, majors_of_interest, required_skills, preferred_skills)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(input.employer_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.weeks)
            .bind(input.hours_per_week)
            .bind(&input.location)
            .bind(&input.majors_of_interest)
            .bind(&input.required_skills)
            .bind(&input.preferred_skills)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE id = ?");
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a position only if it was posted by the given employer.
    pub async fn find_owned(
        pool: &SqlitePool,
        id: DbId,
        employer_id: DbId,
    ) -> Result<Option<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE id = ? AND employer_id = ?");
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .bind(employer_id)
            .fetch_optional(pool)
            .await
    }

    /// List the positions posted by one employer, in posting order.
    pub async fn list_by_employer(
        pool: &SqlitePool,
        employer_id: DbId,
    ) -> Result<Vec<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE employer_id = ? ORDER BY id");
        sqlx::query_as::<_, Position>(&query)
            .bind(employer_id)
            .fetch_all(pool)
            .await
    }

    /// List all positions matching the filter, in posting order.
    ///
    /// An absent pattern disables that half of the filter; when both are
    /// present a position must match both. Matching uses SQLite `LIKE`, which
    /// ignores ASCII case.
    pub async fn search(
        pool: &SqlitePool,
        filter: &PositionFilter,
    ) -> Result<Vec<PositionListing>, sqlx::Error> {
        sqlx::query_as::<_, PositionListing>(
            "SELECT p.id, p.employer_id, p.title, p.description, p.weeks, p.hours_per_week,
                    p.location, p.majors_of_interest, p.required_skills, p.preferred_skills,
                    e.full_name AS employer_name, c.name AS company_name
             FROM positions p
             JOIN employers e ON e.id = p.employer_id
             JOIN companies c ON c.id = e.company_id
             WHERE (?1 IS NULL
                    OR e.full_name LIKE ?1 ESCAPE '\\'
                    OR c.name LIKE ?1 ESCAPE '\\')
               AND (?2 IS NULL OR p.majors_of_interest LIKE ?2 ESCAPE '\\')
             ORDER BY p.id",
        )
        .bind(filter.employer_pattern.as_deref())
        .bind(filter.major_pattern.as_deref())
        .fetch_all(pool)
        .await
    }
}
