//! Sample data for manual testing.
//!
//! Inserts one of everything: a department with a faculty coordinator, a
//! student with a resume, a company with an employer contact and one posted
//! position, plus an application and an offer linking the two sides.

use chrono::Utc;
use coop_core::application::STATUS_SUBMITTED;
use coop_core::types::DbId;

use crate::models::application::CreateApplication;
use crate::models::company::CreateCompany;
use crate::models::employer::CreateEmployer;
use crate::models::faculty::CreateFacultyCoordinator;
use crate::models::offer::CreateOffer;
use crate::models::position::CreatePosition;
use crate::models::student::CreateStudent;
use crate::repositories::{
    ApplicationRepo, CompanyRepo, DepartmentRepo, EmployerRepo, FacultyRepo, OfferRepo,
    PositionRepo, ResumeRepo, StudentRepo,
};
use crate::DbPool;

pub const SAMPLE_STUDENT_EMAIL: &str = "ali@student.com";
pub const SAMPLE_EMPLOYER_EMAIL: &str = "sarah@techcorp.com";
pub const SAMPLE_FACULTY_EMAIL: &str = "medjahed@umich.edu";
pub const SAMPLE_POSITION_TITLE: &str = "Software Engineering Co-Op";

/// Ids of the rows created by [`seed_sample_data`].
#[derive(Debug, Clone, Copy)]
pub struct SeedReport {
    pub department_id: DbId,
    pub faculty_id: DbId,
    pub student_id: DbId,
    pub resume_id: DbId,
    pub company_id: DbId,
    pub employer_id: DbId,
    pub position_id: DbId,
    pub application_id: DbId,
    pub offer_id: DbId,
}

/// Insert the sample rows into an empty, migrated database.
pub async fn seed_sample_data(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let department = DepartmentRepo::create(pool, "Computer Science").await?;

    let faculty = FacultyRepo::create(
        pool,
        &CreateFacultyCoordinator {
            full_name: "Dr. Medjahed".into(),
            email: SAMPLE_FACULTY_EMAIL.into(),
            department_id: department.id,
        },
    )
    .await?;

    let student = StudentRepo::create(
        pool,
        &CreateStudent {
            full_name: "Ali Ramadan".into(),
            email: SAMPLE_STUDENT_EMAIL.into(),
            phone: Some("555-1234".into()),
            major: Some("Computer Science".into()),
            credits_in_major: Some(45),
            gpa: Some(3.7),
            start_term: Some("Fall 2024".into()),
            is_transfer: false,
            completed_semesters: Some(3),
            department_id: Some(department.id),
        },
    )
    .await?;

    let resume = ResumeRepo::create(pool, student.id, "https://example.com/resume.pdf").await?;

    let company = CompanyRepo::create(
        pool,
        &CreateCompany {
            name: "TechCorp".into(),
            location: Some("Detroit, MI".into()),
            website: Some("https://techcorp.com".into()),
        },
    )
    .await?;

    let employer = EmployerRepo::create(
        pool,
        &CreateEmployer {
            company_id: company.id,
            full_name: "Sarah Johnson".into(),
            email: SAMPLE_EMPLOYER_EMAIL.into(),
            phone: Some("555-5678".into()),
        },
    )
    .await?;

    let position = PositionRepo::create(
        pool,
        &CreatePosition {
            employer_id: employer.id,
            title: SAMPLE_POSITION_TITLE.into(),
            description: Some("Backend work in Rust and SQL.".into()),
            weeks: Some(12),
            hours_per_week: Some(20),
            location: Some("Hybrid".into()),
            majors_of_interest: Some("Computer Science".into()),
            required_skills: Some("Rust, SQL".into()),
            preferred_skills: Some("axum".into()),
        },
    )
    .await?;

    let application = ApplicationRepo::create_if_absent(
        pool,
        &CreateApplication {
            position_id: position.id,
            student_id: student.id,
            applied_at: Utc::now(),
            status: STATUS_SUBMITTED,
        },
    )
    .await?
    .ok_or(sqlx::Error::RowNotFound)?;

    let offer = OfferRepo::create(
        pool,
        &CreateOffer {
            position_id: position.id,
            selected_student_id: student.id,
            offer_letter_url: Some("https://example.com/offer.pdf".into()),
        },
    )
    .await?;

    tracing::info!(
        student_id = student.id,
        employer_id = employer.id,
        position_id = position.id,
        "Sample data seeded"
    );

    Ok(SeedReport {
        department_id: department.id,
        faculty_id: faculty.id,
        student_id: student.id,
        resume_id: resume.id,
        company_id: company.id,
        employer_id: employer.id,
        position_id: position.id,
        application_id: application.id,
        offer_id: offer.id,
    })
}
