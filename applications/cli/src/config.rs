/// Host configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use snack_board::DEFAULT_GRID_COLUMNS;
use std::path::{Path, PathBuf};

/// File read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "soundsnacks.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnacksConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_board")]
    pub board: BoardSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// App-private directory imported sounds are copied into
    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: PathBuf,

    /// Directory holding bundled sounds
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardSettings {
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

impl SnacksConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    /// Environment variables use the `SNACKS_` prefix and `__` between
    /// sections, e.g. `SNACKS_STORAGE__DATABASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("SNACKS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse configuration from TOML text, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.storage.database_url.starts_with("sqlite:") {
            return Err(CliError::Config(format!(
                "Only SQLite databases are supported, got {:?}",
                self.storage.database_url
            )));
        }

        if self.storage.sounds_dir.as_os_str().is_empty() {
            return Err(CliError::Config(
                "Sounds directory is required (set SNACKS_STORAGE__SOUNDS_DIR)".to_string(),
            ));
        }

        if let Some(assets) = &self.storage.assets_dir {
            if !assets.is_dir() {
                return Err(CliError::Config(format!(
                    "Assets directory not found at {:?}",
                    assets
                )));
            }
        }

        if self.board.grid_columns == 0 {
            return Err(CliError::Config(
                "Grid needs at least one column".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        sounds_dir: default_sounds_dir(),
        assets_dir: None,
    }
}

fn default_database_url() -> String {
    "sqlite://soundsnacks.db".to_string()
}

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("Sounds")
}

fn default_board() -> BoardSettings {
    BoardSettings {
        grid_columns: default_grid_columns(),
    }
}

fn default_grid_columns() -> usize {
    DEFAULT_GRID_COLUMNS
}

impl Default for SnacksConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            board: default_board(),
        }
    }
}
