//! Handlers for the faculty coordinator dashboard.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use coop_core::error::CoreError;
use coop_core::grade::validate_grade_value;
use coop_core::notice::Notice;
use coop_core::types::DbId;
use coop_db::models::department::Department;
use coop_db::models::faculty::FacultyCoordinator;
use coop_db::models::grade::{CreateGrade, GradeRecord};
use coop_db::models::student::Student;
use coop_db::repositories::{DepartmentRepo, GradeRepo, StudentRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::middleware::rbac::RequireFaculty;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FacultyDashboard {
    pub faculty: FacultyCoordinator,
    pub department: Option<Department>,
    pub students: Vec<Student>,
    pub grades: Vec<GradeRecord>,
}

/// Form body for `POST /faculty/grades`.
#[derive(Debug, Deserialize)]
pub struct GradeForm {
    pub student_id: DbId,
    pub position_id: DbId,
    #[serde(default)]
    pub grade_value: String,
}

/// GET /faculty/dashboard
///
/// Read-only view of the coordinator's own department.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireFaculty(faculty): RequireFaculty,
    flash: Flash,
) -> AppResult<Response> {
    let department = DepartmentRepo::find_by_id(&state.pool, faculty.department_id).await?;
    let students = StudentRepo::list_by_department(&state.pool, faculty.department_id).await?;
    let grades = GradeRepo::list_by_grader(&state.pool, faculty.id).await?;

    Ok(flash.page(FacultyDashboard {
        faculty,
        department,
        students,
        grades,
    }))
}

/// POST /faculty/grades
///
/// Coordinators may only grade students in their own department.
pub async fn record_grade(
    State(state): State<AppState>,
    RequireFaculty(faculty): RequireFaculty,
    flash: Flash,
    Form(input): Form<GradeForm>,
) -> AppResult<Response> {
    let student = StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;

    if student.department_id != Some(faculty.department_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Student is not in your department".into(),
        )));
    }

    let grade_value = validate_grade_value(&input.grade_value)?;

    let grade = GradeRepo::create(
        &state.pool,
        &CreateGrade {
            student_id: student.id,
            position_id: input.position_id,
            grade_value,
            graded_by: faculty.id,
        },
    )
    .await?;

    tracing::info!(
        grade_id = grade.id,
        student_id = student.id,
        faculty_id = faculty.id,
        "Grade recorded"
    );

    Ok(flash.redirect("/faculty/dashboard", Notice::GradeRecorded))
}
