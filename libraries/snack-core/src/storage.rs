//! Storage trait for the soundboard's two record stores

use crate::error::Result;
use crate::types::{
    Category, CategoryId, CreateCategory, CreateSound, Sound, SoundId, UpdateCategory,
    UpdateSound,
};
use async_trait::async_trait;

/// Persistence gateway for categories and sounds
///
/// A synchronous-in-spirit, fallible object store. Callers decide which
/// failures reach the user; implementations just report them.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Categories
    // ========================================================================

    /// Get all categories sorted by name
    async fn get_all_categories(&self) -> Result<Vec<Category>>;

    /// Get category by ID
    async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>>;

    /// Find a category by name, ignoring case
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// Create a new category
    async fn create_category(&self, category: CreateCategory) -> Result<Category>;

    /// Rename or recolor a category
    async fn update_category(&self, id: &CategoryId, update: UpdateCategory) -> Result<Category>;

    /// Delete a category (sounds are untouched)
    async fn delete_category(&self, id: &CategoryId) -> Result<()>;

    /// Number of stored categories
    async fn count_categories(&self) -> Result<u32>;

    // ========================================================================
    // Sounds
    // ========================================================================

    /// Get all sounds sorted by display order
    async fn get_all_sounds(&self) -> Result<Vec<Sound>>;

    /// Get sound by ID
    async fn get_sound(&self, id: &SoundId) -> Result<Option<Sound>>;

    /// Get sounds whose category field equals `category` exactly
    async fn get_sounds_by_category(&self, category: &str) -> Result<Vec<Sound>>;

    /// Number of stored sounds
    async fn count_sounds(&self) -> Result<u32>;

    /// Create a new sound record
    async fn create_sound(&self, sound: CreateSound) -> Result<Sound>;

    /// Update the editable fields of a sound
    async fn update_sound(&self, id: &SoundId, update: UpdateSound) -> Result<Sound>;

    /// Delete a sound record (the audio file is the caller's concern)
    async fn delete_sound(&self, id: &SoundId) -> Result<()>;

    /// Write a batch of display orders atomically
    async fn update_sound_orders(&self, orders: &[(SoundId, u32)]) -> Result<()>;
}
