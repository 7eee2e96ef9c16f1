//! Handlers for the student dashboard.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use coop_core::application::STATUS_SUBMITTED;
use coop_core::error::CoreError;
use coop_core::notice::Notice;
use coop_core::search::PositionFilter;
use coop_core::types::DbId;
use coop_db::models::application::{CreateApplication, StudentApplication};
use coop_db::models::offer::StudentOffer;
use coop_db::models::position::PositionListing;
use coop_db::models::resume::Resume;
use coop_db::models::student::Student;
use coop_db::models::summary::{CoOpSummary, CreateSummary};
use coop_db::repositories::{ApplicationRepo, OfferRepo, PositionRepo, ResumeRepo, SummaryRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::middleware::rbac::RequireStudent;
use crate::state::AppState;

const DASHBOARD: &str = "/student/dashboard";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /student/dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct PositionQuery {
    /// Substring of the employer contact's name or the company name.
    pub employer: Option<String>,
    /// Substring of the position's majors of interest.
    pub major: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub student: Student,
    pub resumes: Vec<Resume>,
    pub positions: Vec<PositionListing>,
    pub applications: Vec<StudentApplication>,
}

/// Form body for `POST /student/summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryForm {
    pub position_id: DbId,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub student: Student,
    pub offers: Vec<StudentOffer>,
    pub summaries: Vec<CoOpSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /student/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    flash: Flash,
    Query(query): Query<PositionQuery>,
) -> AppResult<Response> {
    let filter = PositionFilter::new(query.employer.as_deref(), query.major.as_deref());
    let positions = PositionRepo::search(&state.pool, &filter).await?;
    let applications = ApplicationRepo::list_for_student(&state.pool, student.id).await?;
    let resumes = ResumeRepo::list_for_student(&state.pool, student.id).await?;

    Ok(flash.page(StudentDashboard {
        student,
        resumes,
        positions,
        applications,
    }))
}

/// POST /student/apply/{position_id}
///
/// Applying twice to the same position leaves the first application in
/// place and reports the duplicate.
pub async fn apply(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    flash: Flash,
    Path(position_id): Path<DbId>,
) -> AppResult<Response> {
    PositionRepo::find_by_id(&state.pool, position_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Position",
            id: position_id,
        }))?;

    let created = ApplicationRepo::create_if_absent(
        &state.pool,
        &CreateApplication {
            position_id,
            student_id: student.id,
            applied_at: Utc::now(),
            status: STATUS_SUBMITTED,
        },
    )
    .await?;

    let notice = match created {
        Some(application) => {
            tracing::info!(
                application_id = application.id,
                student_id = student.id,
                position_id,
                "Application submitted"
            );
            Notice::ApplicationSubmitted
        }
        None => {
            tracing::info!(student_id = student.id, position_id, "Duplicate application");
            Notice::DuplicateApplication
        }
    };

    Ok(flash.redirect(DASHBOARD, notice))
}

/// GET /student/summary
pub async fn summary_page(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    flash: Flash,
) -> AppResult<Response> {
    let offers = OfferRepo::list_for_student(&state.pool, student.id).await?;
    let summaries = SummaryRepo::list_for_student(&state.pool, student.id).await?;

    Ok(flash.page(SummaryView {
        student,
        offers,
        summaries,
    }))
}

/// POST /student/summary
///
/// Summaries are not checked against offers, and a student may submit any
/// number of them for the same position.
pub async fn submit_summary(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    flash: Flash,
    Form(input): Form<SummaryForm>,
) -> AppResult<Response> {
    let summary = SummaryRepo::create(
        &state.pool,
        &CreateSummary {
            student_id: student.id,
            position_id: input.position_id,
            text: input.text,
        },
    )
    .await?;

    tracing::info!(
        summary_id = summary.id,
        student_id = student.id,
        position_id = summary.position_id,
        "Co-op summary submitted"
    );

    Ok(flash.redirect(DASHBOARD, Notice::SummarySubmitted))
}
