//! Handlers for the employer dashboard: posting positions, reviewing
//! applicants, and recording offers.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use coop_core::error::CoreError;
use coop_core::notice::Notice;
use coop_core::position::parse_work_term;
use coop_core::types::DbId;
use coop_db::models::application::PositionApplicant;
use coop_db::models::company::Company;
use coop_db::models::employer::Employer;
use coop_db::models::offer::CreateOffer;
use coop_db::models::position::{CreatePosition, Position};
use coop_db::repositories::{ApplicationRepo, CompanyRepo, OfferRepo, PositionRepo};
use coop_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::middleware::rbac::RequireEmployer;
use crate::state::AppState;

const DASHBOARD: &str = "/employer/dashboard";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EmployerDashboard {
    pub employer: Employer,
    pub company: Option<Company>,
    pub positions: Vec<Position>,
}

/// Form body for `POST /employer/dashboard`.
///
/// Text fields are stored exactly as submitted; a field left out of the
/// form is stored as NULL. `weeks` and `hours_per_week` are validated by
/// [`parse_work_term`].
#[derive(Debug, Deserialize)]
pub struct PositionForm {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub weeks: String,
    #[serde(default)]
    pub hours_per_week: String,
    pub location: Option<String>,
    pub majors_of_interest: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicantsView {
    pub position: Position,
    pub applications: Vec<PositionApplicant>,
}

/// Form body for `POST /employer/offers`.
#[derive(Debug, Deserialize)]
pub struct OfferForm {
    pub position_id: DbId,
    pub student_id: DbId,
    pub offer_letter_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /employer/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    RequireEmployer(employer): RequireEmployer,
    flash: Flash,
) -> AppResult<Response> {
    let company = CompanyRepo::find_by_id(&state.pool, employer.company_id).await?;
    let positions = PositionRepo::list_by_employer(&state.pool, employer.id).await?;

    Ok(flash.page(EmployerDashboard {
        employer,
        company,
        positions,
    }))
}

/// POST /employer/dashboard
pub async fn post_position(
    State(state): State<AppState>,
    RequireEmployer(employer): RequireEmployer,
    flash: Flash,
    Form(input): Form<PositionForm>,
) -> AppResult<Response> {
    let term = parse_work_term(&input.weeks, &input.hours_per_week)?;

    let position = PositionRepo::create(
        &state.pool,
        &CreatePosition {
            employer_id: employer.id,
            title: input.title,
            description: input.description,
            weeks: term.weeks,
            hours_per_week: term.hours_per_week,
            location: input.location,
            majors_of_interest: input.majors_of_interest,
            required_skills: input.required_skills,
            preferred_skills: input.preferred_skills,
        },
    )
    .await?;

    tracing::info!(
        position_id = position.id,
        employer_id = employer.id,
        "Position posted"
    );

    Ok(flash.redirect(DASHBOARD, Notice::PositionPosted))
}

/// GET /employer/positions/{id}/applications
pub async fn list_applications(
    State(state): State<AppState>,
    RequireEmployer(employer): RequireEmployer,
    flash: Flash,
    Path(position_id): Path<DbId>,
) -> AppResult<Response> {
    let position = owned_position(&state.pool, position_id, employer.id).await?;
    let applications = ApplicationRepo::list_for_position(&state.pool, position.id).await?;

    Ok(flash.page(ApplicantsView {
        position,
        applications,
    }))
}

/// POST /employer/offers
///
/// Only students who applied to the position can be offered it.
pub async fn record_offer(
    State(state): State<AppState>,
    RequireEmployer(employer): RequireEmployer,
    flash: Flash,
    Form(input): Form<OfferForm>,
) -> AppResult<Response> {
    let position = owned_position(&state.pool, input.position_id, employer.id).await?;

    if !ApplicationRepo::exists(&state.pool, input.student_id, position.id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Student {} has not applied to position {}",
            input.student_id, position.id
        ))));
    }

    let offer = OfferRepo::create(
        &state.pool,
        &CreateOffer {
            position_id: position.id,
            selected_student_id: input.student_id,
            offer_letter_url: input.offer_letter_url.filter(|url| !url.trim().is_empty()),
        },
    )
    .await?;

    tracing::info!(
        offer_id = offer.id,
        position_id = position.id,
        student_id = input.student_id,
        "Offer recorded"
    );

    Ok(flash.redirect(DASHBOARD, Notice::OfferRecorded))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a position that belongs to `employer_id`.
///
/// Another employer's position is reported as missing.
async fn owned_position(
    pool: &DbPool,
    position_id: DbId,
    employer_id: DbId,
) -> AppResult<Position> {
    PositionRepo::find_owned(pool, position_id, employer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Position",
            id: position_id,
        }))
}
