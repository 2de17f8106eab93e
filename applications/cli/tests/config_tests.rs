/// Configuration parsing and validation tests
use snack_cli::{CliError, SnacksConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = SnacksConfig::default();

    assert_eq!(config.storage.database_url, "sqlite://soundsnacks.db");
    assert_eq!(config.storage.sounds_dir, PathBuf::from("Sounds"));
    assert!(config.storage.assets_dir.is_none());
    assert_eq!(config.board.grid_columns, 4);
    config.validate().unwrap();
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = SnacksConfig::from_toml_str(
        r#"
        [board]
        grid_columns = 3
        "#,
    )
    .unwrap();

    assert_eq!(config.board.grid_columns, 3);
    assert_eq!(config.storage.database_url, "sqlite://soundsnacks.db");
}

#[test]
fn test_full_toml() {
    let assets = TempDir::new().unwrap();
    let toml = format!(
        r#"
        [storage]
        database_url = "sqlite:///tmp/board.db"
        sounds_dir = "/tmp/board-sounds"
        assets_dir = "{}"
        "#,
        assets.path().display()
    );

    let config = SnacksConfig::from_toml_str(&toml).unwrap();

    assert_eq!(config.storage.database_url, "sqlite:///tmp/board.db");
    assert_eq!(config.storage.sounds_dir, PathBuf::from("/tmp/board-sounds"));
    assert_eq!(config.storage.assets_dir.as_deref(), Some(assets.path()));
    config.validate().unwrap();
}

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[board]\ngrid_columns = 6\n").unwrap();

    let config = SnacksConfig::load(Some(&path)).unwrap();

    assert_eq!(config.board.grid_columns, 6);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = SnacksConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = SnacksConfig::default();
    config.board.grid_columns = 0;
    assert!(matches!(config.validate(), Err(CliError::Config(_))));

    let mut config = SnacksConfig::default();
    config.storage.database_url = "postgres://localhost/snacks".to_string();
    assert!(matches!(config.validate(), Err(CliError::Config(_))));

    let mut config = SnacksConfig::default();
    config.storage.assets_dir = Some(PathBuf::from("/definitely/not/here"));
    assert!(matches!(config.validate(), Err(CliError::Config(_))));

    let mut config = SnacksConfig::default();
    config.storage.sounds_dir = PathBuf::new();
    assert!(matches!(config.validate(), Err(CliError::Config(_))));
}
