//! Integration tests for the sample-data seed.

use coop_core::search::PositionFilter;
use coop_db::repositories::{
    ApplicationRepo, EmployerRepo, FacultyRepo, OfferRepo, PositionRepo, ResumeRepo, StudentRepo,
};
use coop_db::seed::{
    seed_sample_data, SAMPLE_EMPLOYER_EMAIL, SAMPLE_FACULTY_EMAIL, SAMPLE_POSITION_TITLE,
    SAMPLE_STUDENT_EMAIL,
};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_creates_one_of_everything(pool: SqlitePool) {
    let report = seed_sample_data(&pool).await.unwrap();

    let student = StudentRepo::find_by_email(&pool, SAMPLE_STUDENT_EMAIL)
        .await
        .unwrap()
        .expect("seeded student");
    assert_eq!(student.id, report.student_id);
    assert_eq!(student.department_id, Some(report.department_id));

    let employer = EmployerRepo::find_by_email(&pool, SAMPLE_EMPLOYER_EMAIL)
        .await
        .unwrap()
        .expect("seeded employer");
    assert_eq!(employer.company_id, report.company_id);

    let faculty = FacultyRepo::find_by_email(&pool, SAMPLE_FACULTY_EMAIL)
        .await
        .unwrap()
        .expect("seeded faculty");
    assert_eq!(faculty.department_id, report.department_id);

    let positions = PositionRepo::search(&pool, &PositionFilter::default())
        .await
        .unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].title, SAMPLE_POSITION_TITLE);
    assert_eq!(positions[0].company_name, "TechCorp");

    let applications = ApplicationRepo::list_for_student(&pool, report.student_id)
        .await
        .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].status, "Submitted");

    let offers = OfferRepo::list_for_student(&pool, report.student_id)
        .await
        .unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].position_title, SAMPLE_POSITION_TITLE);

    let resumes = ResumeRepo::list_for_student(&pool, report.student_id)
        .await
        .unwrap();
    assert_eq!(resumes.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_twice_violates_unique_email(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    assert!(
        seed_sample_data(&pool).await.is_err(),
        "re-seeding without a reset must hit the unique email constraint"
    );
}
