//! Persistence layer: SQLite pool, migrations, row models, and repositories.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Tables in dependency order (parents first). Dropping walks this in reverse.
pub const TABLES: &[&str] = &[
    "departments",
    "faculty_coordinators",
    "students",
    "resumes",
    "companies",
    "employers",
    "positions",
    "applications",
    "offers",
    "coop_summaries",
    "grades",
    "sessions",
];

/// Create a connection pool from a database URL such as `sqlite://coop.db`.
///
/// The database file is created if it does not exist. Foreign keys are
/// enforced on every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Version of the newest successfully applied migration, if any.
pub async fn schema_version(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1",
    )
    .fetch_one(pool)
    .await
}

/// Drop every table (including the migration ledger) and migrate again.
///
/// This is the only schema-versioning tool the portal has: the seed binary
/// uses it to start from an empty database.
pub async fn reset_schema(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    for table in TABLES.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await?;
    }
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(pool)
        .await?;
    tracing::info!(tables = TABLES.len(), "Dropped all tables");

    run_migrations(pool).await
}
