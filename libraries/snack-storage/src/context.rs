use crate::{categories, sounds};
use async_trait::async_trait;
use snack_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Categories
    async fn get_all_categories(&self) -> Result<Vec<Category>> {
        categories::get_all(&self.pool).await
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>> {
        categories::get_by_id(&self.pool, id).await
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        categories::find_by_name(&self.pool, name).await
    }

    async fn create_category(&self, category: CreateCategory) -> Result<Category> {
        categories::create(&self.pool, category).await
    }

    async fn update_category(&self, id: &CategoryId, update: UpdateCategory) -> Result<Category> {
        categories::update(&self.pool, id, update).await
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<()> {
        categories::delete(&self.pool, id).await
    }

    async fn count_categories(&self) -> Result<u32> {
        categories::count(&self.pool).await
    }

    // Sounds
    async fn get_all_sounds(&self) -> Result<Vec<Sound>> {
        sounds::get_all(&self.pool).await
    }

    async fn get_sound(&self, id: &SoundId) -> Result<Option<Sound>> {
        sounds::get_by_id(&self.pool, id).await
    }

    async fn get_sounds_by_category(&self, category: &str) -> Result<Vec<Sound>> {
        sounds::get_by_category(&self.pool, category).await
    }

    async fn count_sounds(&self) -> Result<u32> {
        sounds::count(&self.pool).await
    }

    async fn create_sound(&self, sound: CreateSound) -> Result<Sound> {
        sounds::create(&self.pool, sound).await
    }

    async fn update_sound(&self, id: &SoundId, update: UpdateSound) -> Result<Sound> {
        sounds::update(&self.pool, id, update).await
    }

    async fn delete_sound(&self, id: &SoundId) -> Result<()> {
        sounds::delete(&self.pool, id).await
    }

    async fn update_sound_orders(&self, orders: &[(SoundId, u32)]) -> Result<()> {
        sounds::update_orders(&self.pool, orders).await
    }
}
