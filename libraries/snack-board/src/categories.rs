//! Category manager

use std::sync::Arc;

use snack_core::validation::{ensure_unique_category_name, normalize_color, require_text};
use snack_core::{
    Category, CategoryId, CreateCategory, Result, SnackError, StorageContext, UpdateCategory,
};

/// Create, edit, delete and list categories
///
/// The default category can be neither edited nor deleted. Names are
/// unique ignoring case and surrounding whitespace.
pub struct CategoryService<S: ?Sized> {
    storage: Arc<S>,
}

impl<S: StorageContext + ?Sized> CategoryService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// All categories sorted by name
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.storage.get_all_categories().await
    }

    /// Create a category from user input
    pub async fn create(&self, name: &str, color: &str) -> Result<Category> {
        let name = require_text(name, "Name")?;
        let color_hex = normalize_color(color)?;

        let existing = self.storage.get_all_categories().await?;
        ensure_unique_category_name(&name, &existing, None)?;

        let category = self
            .storage
            .create_category(CreateCategory { name, color_hex })
            .await?;

        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Rename and recolor a category
    ///
    /// Sounds keep the category name they were saved with; a renamed
    /// category no longer colors them.
    pub async fn update(&self, id: &CategoryId, name: &str, color: &str) -> Result<Category> {
        let current = self
            .storage
            .get_category(id)
            .await?
            .ok_or_else(|| SnackError::not_found("Category", id.as_str()))?;

        if current.is_default() {
            return Err(SnackError::validation(
                "The default category cannot be edited",
            ));
        }

        let name = require_text(name, "Name")?;
        let color_hex = normalize_color(color)?;

        let existing = self.storage.get_all_categories().await?;
        ensure_unique_category_name(&name, &existing, Some(id))?;

        let category = self
            .storage
            .update_category(id, UpdateCategory { name, color_hex })
            .await?;

        tracing::info!(id = %category.id, name = %category.name, "category updated");
        Ok(category)
    }

    /// Delete a category; its sounds are left untouched
    ///
    /// Only the default-category rule is reported. Storage failures are
    /// logged and swallowed.
    pub async fn delete(&self, id: &CategoryId) -> Result<()> {
        let current = match self.storage.get_category(id).await {
            Ok(Some(category)) => category,
            Ok(None) => {
                tracing::debug!(id = %id, "category already gone");
                return Ok(());
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "failed to load category for deletion");
                return Ok(());
            }
        };

        if current.is_default() {
            return Err(SnackError::validation(
                "The default category cannot be deleted",
            ));
        }

        match self.storage.delete_category(id).await {
            Ok(()) => tracing::info!(id = %id, name = %current.name, "category deleted"),
            Err(e) => tracing::error!(id = %id, error = %e, "failed to delete category"),
        }
        Ok(())
    }
}
