//! HTTP-level integration tests for the student dashboard.
//!
//! Tests cover the position listing and its employer/major filters, applying
//! (including duplicates and missing positions), scoping to the logged-in
//! student, and co-op summaries.

mod common;

use axum::http::StatusCode;
use common::{assert_redirect, body_json, cookies, get, login, post_form, set_cookie};
use coop_db::models::company::CreateCompany;
use coop_db::models::employer::CreateEmployer;
use coop_db::models::position::{CreatePosition, Position};
use coop_db::models::student::CreateStudent;
use coop_db::repositories::{CompanyRepo, EmployerRepo, PositionRepo, StudentRepo};
use coop_db::seed::{seed_sample_data, SAMPLE_POSITION_TITLE, SAMPLE_STUDENT_EMAIL};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Add a second company, employer, and position next to the seeded ones.
async fn add_second_position(pool: &SqlitePool) -> Position {
    let company = CompanyRepo::create(
        pool,
        &CreateCompany {
            name: "Great Lakes Health".into(),
            location: None,
            website: None,
        },
    )
    .await
    .unwrap();
    let employer = EmployerRepo::create(
        pool,
        &CreateEmployer {
            company_id: company.id,
            full_name: "Lena Park".into(),
            email: "lena@glh.org".into(),
            phone: None,
        },
    )
    .await
    .unwrap();
    PositionRepo::create(
        pool,
        &CreatePosition {
            employer_id: employer.id,
            title: "Data Analyst Co-Op".into(),
            description: None,
            weeks: Some(16),
            hours_per_week: Some(30),
            location: Some("Ann Arbor".into()),
            majors_of_interest: Some("Statistics".into()),
            required_skills: None,
            preferred_skills: None,
        },
    )
    .await
    .unwrap()
}

async fn student_session(pool: &SqlitePool) -> (axum::Router, String) {
    let app = common::build_test_app(pool.clone());
    let session = login(app.clone(), SAMPLE_STUDENT_EMAIL, "student").await;
    (app, session)
}

async fn listed_titles(app: axum::Router, uri: &str, session: &str) -> Vec<String> {
    let response = get(app, uri, Some(session)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["positions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_shows_positions_applications_and_profile(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    let (app, session) = student_session(&pool).await;

    let response = get(app, "/student/dashboard", Some(&session)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let data = &json["data"];
    assert_eq!(data["student"]["email"], SAMPLE_STUDENT_EMAIL);
    assert_eq!(data["resumes"].as_array().unwrap().len(), 1);

    let positions = data["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["title"], SAMPLE_POSITION_TITLE);
    assert_eq!(positions[0]["employer_name"], "Sarah Johnson");
    assert_eq!(positions[0]["company_name"], "TechCorp");

    let applications = data["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["position_title"], SAMPLE_POSITION_TITLE);
    assert_eq!(applications[0]["status"], "Submitted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_employer_filter_matches_company_or_contact(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    add_second_position(&pool).await;
    let (app, session) = student_session(&pool).await;

    let by_company = listed_titles(app.clone(), "/student/dashboard?employer=Tech", &session).await;
    assert_eq!(by_company, [SAMPLE_POSITION_TITLE]);

    let by_contact = listed_titles(app.clone(), "/student/dashboard?employer=Lena", &session).await;
    assert_eq!(by_contact, ["Data Analyst Co-Op"]);

    let none = listed_titles(app, "/student/dashboard?employer=Globex", &session).await;
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_major_filter_ignores_ascii_case(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    add_second_position(&pool).await;
    let (app, session) = student_session(&pool).await;

    let titles = listed_titles(app, "/student/dashboard?major=computer", &session).await;
    assert_eq!(titles, [SAMPLE_POSITION_TITLE]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filters_combine_as_intersection(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    add_second_position(&pool).await;
    let (app, session) = student_session(&pool).await;

    let both = listed_titles(
        app.clone(),
        "/student/dashboard?employer=Great+Lakes&major=Statistics",
        &session,
    )
    .await;
    assert_eq!(both, ["Data Analyst Co-Op"]);

    let disjoint = listed_titles(
        app,
        "/student/dashboard?employer=TechCorp&major=Statistics",
        &session,
    )
    .await;
    assert!(disjoint.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_filters_list_everything(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    add_second_position(&pool).await;
    let (app, session) = student_session(&pool).await;

    let titles = listed_titles(app, "/student/dashboard?employer=&major=+", &session).await;
    assert_eq!(titles.len(), 2);
}

// ---------------------------------------------------------------------------
// Applying
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_creates_application(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    let position = add_second_position(&pool).await;
    let (app, session) = student_session(&pool).await;

    let uri = format!("/student/apply/{}", position.id);
    let response = post_form(app.clone(), &uri, "", Some(&session)).await;
    assert_redirect(&response, "/student/dashboard");
    let flash = set_cookie(&response, "coop_flash").unwrap();
    assert_eq!(flash, "coop_flash=application-submitted");

    let response = get(app, "/student/dashboard", Some(&cookies(&[&session, &flash]))).await;
    let json = body_json(response).await;
    assert_eq!(json["notices"][0]["message"], "Application Submitted Successfully!");
    assert_eq!(json["notices"][0]["level"], "success");

    let applications = json["data"]["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 2);
    assert_eq!(applications[1]["position_id"], position.id);
    assert_eq!(applications[1]["status"], "Submitted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_application_is_reported_not_stored(pool: SqlitePool) {
    let seeded = seed_sample_data(&pool).await.unwrap();
    let (app, session) = student_session(&pool).await;

    let uri = format!("/student/apply/{}", seeded.position_id);
    let response = post_form(app, &uri, "", Some(&session)).await;

    assert_redirect(&response, "/student/dashboard");
    assert_eq!(
        set_cookie(&response, "coop_flash").as_deref(),
        Some("coop_flash=duplicate-application")
    );

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM applications WHERE student_id = ? AND position_id = ?",
    )
    .bind(seeded.student_id)
    .bind(seeded.position_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_to_missing_position_returns_404(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    let (app, session) = student_session(&pool).await;

    let response = post_form(app, "/student/apply/9999", "", Some(&session)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_is_scoped_to_the_logged_in_student(pool: SqlitePool) {
    let seeded = seed_sample_data(&pool).await.unwrap();
    StudentRepo::create(
        &pool,
        &CreateStudent {
            full_name: "Maya Chen".into(),
            email: "maya@student.com".into(),
            department_id: Some(seeded.department_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);

    let session = login(app.clone(), "maya@student.com", "student").await;
    let response = get(app, "/student/dashboard", Some(&session)).await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["student"]["full_name"], "Maya Chen");
    assert!(json["data"]["applications"].as_array().unwrap().is_empty());
    assert!(json["data"]["resumes"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["positions"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_page_lists_offers(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    let (app, session) = student_session(&pool).await;

    let response = get(app, "/student/summary", Some(&session)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let offers = json["data"]["offers"].as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["position_title"], SAMPLE_POSITION_TITLE);
    assert!(json["data"]["summaries"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_summary(pool: SqlitePool) {
    let seeded = seed_sample_data(&pool).await.unwrap();
    let (app, session) = student_session(&pool).await;

    let body = format!(
        "position_id={}&text=Built+a+billing+service+in+Rust.",
        seeded.position_id
    );
    let response = post_form(app.clone(), "/student/summary", &body, Some(&session)).await;
    assert_redirect(&response, "/student/dashboard");
    assert_eq!(
        set_cookie(&response, "coop_flash").as_deref(),
        Some("coop_flash=summary-submitted")
    );

    // No duplicate check: a second summary for the same position is kept.
    let response = post_form(app.clone(), "/student/summary", &body, Some(&session)).await;
    assert_redirect(&response, "/student/dashboard");

    let response = get(app, "/student/summary", Some(&session)).await;
    let json = body_json(response).await;
    let summaries = json["data"]["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["text"], "Built a billing service in Rust.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_for_missing_position_is_rejected(pool: SqlitePool) {
    seed_sample_data(&pool).await.unwrap();
    let (app, session) = student_session(&pool).await;

    let response = post_form(
        app,
        "/student/summary",
        "position_id=9999&text=Nothing",
        Some(&session),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
