use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    coop_db::health_check(&pool).await.unwrap();

    for table in coop_db::TABLES {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Foreign keys must be enforced on pooled connections.
#[sqlx::test(migrations = "./migrations")]
async fn test_foreign_keys_enforced(pool: SqlitePool) {
    let result =
        sqlx::query("INSERT INTO employers (company_id, full_name, email) VALUES (999, 'x', 'x@x')")
            .execute(&pool)
            .await;
    assert!(result.is_err(), "dangling company_id must be rejected");
}

/// Dropping and recreating leaves an empty, fully migrated schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_reset_schema_empties_tables(pool: SqlitePool) {
    coop_db::seed::seed_sample_data(&pool).await.unwrap();

    coop_db::reset_schema(&pool).await.unwrap();

    let students: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(students.0, 0);

    // The schema is usable again straight away.
    coop_db::seed::seed_sample_data(&pool).await.unwrap();
}

/// The newest migration is reported once the schema is in place.
#[sqlx::test(migrations = "./migrations")]
async fn test_schema_version_reports_latest_migration(pool: SqlitePool) {
    let version = coop_db::schema_version(&pool).await.unwrap();
    assert_eq!(version, Some(20261016000012));
}

/// Every foreign key column leads at least one index.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_fks_have_indexes(pool: SqlitePool) {
    let unindexed: Vec<(String, String)> = sqlx::query_as(
        r#"SELECT m.name, f."from"
           FROM sqlite_master m
           JOIN pragma_foreign_key_list(m.name) f
           WHERE m.type = 'table'
             AND NOT EXISTS (
                 SELECT 1
                 FROM pragma_index_list(m.name) il
                 JOIN pragma_index_info(il.name) ii
                 WHERE ii.seqno = 0 AND ii.name = f."from"
             )
           ORDER BY m.name"#,
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(unindexed.is_empty(), "FK columns without an index: {unindexed:?}");
}
