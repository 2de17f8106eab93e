//! Sound import, edit, delete and drag reorder

use std::path::PathBuf;
use std::sync::Arc;

use snack_core::order::{next_order, reorder};
use snack_core::validation::{parse_order, require_text, supported_extension};
use snack_core::{AudioRef, CreateSound, Result, SnackError, Sound, SoundId, StorageContext, UpdateSound};
use snack_importer::SoundsDirectory;

/// Input for importing a user-picked file
#[derive(Debug, Clone)]
pub struct NewSound {
    pub description: String,
    pub category: String,
    pub source: PathBuf,
}

/// Input from the edit form; `order` is the raw text field
#[derive(Debug, Clone)]
pub struct EditSound {
    pub description: String,
    pub category: String,
    pub order: String,
}

/// Manage sound records and the files they own
pub struct SoundService<S: ?Sized> {
    storage: Arc<S>,
    sounds_dir: SoundsDirectory,
}

impl<S: StorageContext + ?Sized> SoundService<S> {
    pub fn new(storage: Arc<S>, sounds_dir: SoundsDirectory) -> Self {
        Self {
            storage,
            sounds_dir,
        }
    }

    pub fn sounds_dir(&self) -> &SoundsDirectory {
        &self.sounds_dir
    }

    /// All sounds sorted by display order
    pub async fn list(&self) -> Result<Vec<Sound>> {
        self.storage.get_all_sounds().await
    }

    pub async fn get(&self, id: &SoundId) -> Result<Option<Sound>> {
        self.storage.get_sound(id).await
    }

    /// Import a file and append a custom sound at the end of the board
    ///
    /// The file is copied under a fresh name; the source stays where it is.
    /// If the record cannot be saved the copy is removed again.
    pub async fn add(&self, input: NewSound) -> Result<Sound> {
        let description = require_text(&input.description, "Description")?;
        let category = require_text(&input.category, "Category")?;
        supported_extension(&input.source)?;

        let order = next_order(self.storage.count_sounds().await? as usize);

        let copied = self.sounds_dir.copy_in(&input.source).map_err(|e| {
            tracing::error!(source = %input.source.display(), error = %e, "failed to copy sound file");
            SnackError::from(e)
        })?;

        let created = self
            .storage
            .create_sound(CreateSound {
                description,
                audio: AudioRef::managed(copied.file_name.clone(), copied.extension.clone()),
                category,
                order,
                is_custom: true,
            })
            .await;

        match created {
            Ok(sound) => {
                tracing::info!(id = %sound.id, order, file = %copied.file_name, "sound added");
                Ok(sound)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save sound, removing copied file");
                if let Err(remove_err) = self.sounds_dir.remove(&copied.file_name) {
                    tracing::warn!(file = %copied.file_name, error = %remove_err, "orphaned sound file");
                }
                Err(e)
            }
        }
    }

    /// Update description, category and order; the audio file is untouched
    pub async fn edit(&self, id: &SoundId, input: EditSound) -> Result<Sound> {
        let description = require_text(&input.description, "Description")?;
        let category = require_text(&input.category, "Category")?;
        let order = parse_order(&input.order)?;

        let sound = self
            .storage
            .update_sound(
                id,
                UpdateSound {
                    description,
                    category,
                    order,
                },
            )
            .await?;

        tracing::info!(id = %sound.id, order, "sound updated");
        Ok(sound)
    }

    /// Delete a sound and, for imported sounds, its file
    ///
    /// Failures are logged, never surfaced. Returns whether the record was
    /// deleted.
    pub async fn delete(&self, id: &SoundId) -> bool {
        let sound = match self.storage.get_sound(id).await {
            Ok(Some(sound)) => sound,
            Ok(None) => {
                tracing::debug!(id = %id, "sound already gone");
                return false;
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "failed to load sound for deletion");
                return false;
            }
        };

        if sound.is_custom {
            if let Some(file_name) = sound.audio.managed_file_name() {
                if let Err(e) = self.sounds_dir.remove(file_name) {
                    tracing::warn!(id = %id, file = file_name, error = %e, "failed to remove sound file");
                }
            }
        }

        match self.storage.delete_sound(id).await {
            Ok(()) => {
                tracing::info!(id = %id, "sound deleted");
                true
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "failed to delete sound");
                false
            }
        }
    }

    /// Drop `dragged` onto `destination` and persist the new numbering
    ///
    /// Returns `None` when nothing moved. The reordered list is returned
    /// even if saving it failed; the failure is only logged.
    pub async fn reorder(&self, dragged: &SoundId, destination: &SoundId) -> Option<Vec<Sound>> {
        let current = match self.storage.get_all_sounds().await {
            Ok(sounds) => sounds,
            Err(e) => {
                tracing::error!(error = %e, "failed to load sounds for reorder");
                return None;
            }
        };

        let reordered = reorder(&current, dragged, destination)?;

        let orders: Vec<(SoundId, u32)> = reordered
            .iter()
            .map(|sound| (sound.id.clone(), sound.order))
            .collect();

        match self.storage.update_sound_orders(&orders).await {
            Ok(()) => tracing::debug!(count = orders.len(), "reorder persisted"),
            Err(e) => tracing::error!(error = %e, "failed to persist reorder"),
        }

        Some(reordered)
    }
}
