//! Drop and recreate the schema, then insert the sample rows.
//!
//! Reads `DATABASE_URL` (default `sqlite://coop.db`). Every existing row is
//! lost.

use anyhow::Context;
use coop_api::telemetry;
use coop_db::seed::{
    seed_sample_data, SAMPLE_EMPLOYER_EMAIL, SAMPLE_FACULTY_EMAIL, SAMPLE_STUDENT_EMAIL,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://coop.db".into());

    let pool = coop_db::create_pool(&database_url)
        .await
        .with_context(|| format!("connecting to {database_url}"))?;

    coop_db::reset_schema(&pool)
        .await
        .context("recreating the schema")?;

    let report = seed_sample_data(&pool)
        .await
        .context("inserting sample data")?;

    tracing::info!(
        position_id = report.position_id,
        student = SAMPLE_STUDENT_EMAIL,
        employer = SAMPLE_EMPLOYER_EMAIL,
        faculty = SAMPLE_FACULTY_EMAIL,
        "Database seeded; log in with any of these emails"
    );

    pool.close().await;
    Ok(())
}
