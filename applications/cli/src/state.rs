/// Shared application state
use crate::config::SnacksConfig;
use crate::error::{CliError, Result};
use snack_board::{seed_categories, CategoryService, SoundService};
use snack_core::{Category, CategoryId, Sound, SoundId, StorageContext};
use snack_importer::{SoundLibrary, SoundsDirectory};
use snack_storage::LocalStorageContext;
use std::sync::Arc;

/// Everything a command needs, built once per invocation
pub struct AppState {
    pub config: SnacksConfig,
    pub storage: Arc<LocalStorageContext>,
    pub categories: CategoryService<LocalStorageContext>,
    pub sounds: SoundService<LocalStorageContext>,
}

impl AppState {
    /// Open the database, apply migrations, prepare the sounds directory
    /// and seed the first-launch categories
    pub async fn open(config: SnacksConfig) -> Result<Self> {
        let pool = snack_storage::create_pool(&config.storage.database_url).await?;
        snack_storage::run_migrations(&pool).await?;
        let storage = Arc::new(LocalStorageContext::new(pool));
        tracing::debug!(url = %config.storage.database_url, "database connected");

        let sounds_dir = SoundsDirectory::new(config.storage.sounds_dir.clone());
        sounds_dir.initialize()?;

        let seeded = seed_categories(storage.as_ref()).await?;
        if seeded > 0 {
            tracing::info!(seeded, "first launch, categories created");
        }

        Ok(Self {
            categories: CategoryService::new(Arc::clone(&storage)),
            sounds: SoundService::new(Arc::clone(&storage), sounds_dir),
            storage,
            config,
        })
    }

    /// Audio source over the sounds directory and bundled assets
    pub fn library(&self) -> SoundLibrary {
        SoundLibrary::new(
            self.sounds.sounds_dir().clone(),
            self.config.storage.assets_dir.clone(),
        )
    }

    /// Look up a sound, failing when the id is unknown
    pub async fn require_sound(&self, id: &str) -> Result<Sound> {
        self.storage
            .get_sound(&SoundId::new(id))
            .await?
            .ok_or_else(|| CliError::SoundNotFound(id.to_string()))
    }

    /// Look up a category, failing when the id is unknown
    pub async fn require_category(&self, id: &str) -> Result<Category> {
        self.storage
            .get_category(&CategoryId::new(id))
            .await?
            .ok_or_else(|| CliError::CategoryNotFound(id.to_string()))
    }
}
