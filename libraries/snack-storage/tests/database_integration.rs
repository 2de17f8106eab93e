//! Pool creation and migration behavior against real database files

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("snacks.db").display());

    let pool = snack_storage::create_pool(&db_url).await.unwrap();
    snack_storage::run_migrations(&pool).await.unwrap();
    snack_storage::run_migrations(&pool).await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'sounds') ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(tables, vec!["categories", "sounds"]);
}

#[tokio::test]
async fn test_database_file_is_created() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("fresh.db");
    assert!(!db_path.exists());

    let pool = snack_storage::create_pool(&format!("sqlite://{}", db_path.display()))
        .await
        .unwrap();
    snack_storage::run_migrations(&pool).await.unwrap();

    assert!(db_path.exists());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("snacks.db").display());

    {
        let pool = snack_storage::create_pool(&db_url).await.unwrap();
        snack_storage::run_migrations(&pool).await.unwrap();
        snack_storage::categories::create(
            &pool,
            snack_core::CreateCategory {
                name: "Risas".to_string(),
                color_hex: "#FFFF00".to_string(),
            },
        )
        .await
        .unwrap();
        pool.close().await;
    }

    let pool = snack_storage::create_pool(&db_url).await.unwrap();
    let found = snack_storage::categories::find_by_name(&pool, "risas")
        .await
        .unwrap();
    assert!(found.is_some());
}
