//! Resolving audio references to bytes

use crate::sounds_dir::SoundsDirectory;
use snack_core::traits::AudioLoader;
use snack_core::types::{AudioRef, Sound};
use snack_core::validation::SUPPORTED_EXTENSIONS;
use snack_core::{Result, SnackError};
use std::path::{Path, PathBuf};

/// Audio source for playback: imported files plus bundled assets
///
/// Bundled assets are looked up by exact name first, then with each
/// supported extension appended. Managed files are read from the sounds
/// directory and fall back to a file of the same name among the assets.
#[derive(Debug, Clone)]
pub struct SoundLibrary {
    sounds: SoundsDirectory,
    assets_dir: Option<PathBuf>,
}

impl SoundLibrary {
    pub fn new(sounds: SoundsDirectory, assets_dir: Option<PathBuf>) -> Self {
        Self { sounds, assets_dir }
    }

    pub fn sounds_dir(&self) -> &SoundsDirectory {
        &self.sounds
    }

    /// First existing file backing `audio`, if any
    pub fn resolve(&self, audio: &AudioRef) -> Option<PathBuf> {
        match audio {
            AudioRef::Bundled { asset_name } => self.find_asset(asset_name),
            AudioRef::Managed {
                file_name,
                extension,
            } => self
                .sounds
                .path_for(file_name)
                .ok()
                .filter(|p| p.is_file())
                .or_else(|| self.asset_path(file_name))
                .or_else(|| self.asset_path(&format!("{}.{}", file_name, extension))),
        }
    }

    fn find_asset(&self, name: &str) -> Option<PathBuf> {
        self.asset_path(name).or_else(|| {
            SUPPORTED_EXTENSIONS
                .iter()
                .find_map(|ext| self.asset_path(&format!("{}.{}", name, ext)))
        })
    }

    fn asset_path(&self, name: &str) -> Option<PathBuf> {
        let dir = self.assets_dir.as_deref()?;
        let path = dir.join(name);
        (is_inside(dir, &path) && path.is_file()).then_some(path)
    }
}

fn is_inside(dir: &Path, path: &Path) -> bool {
    path.parent() == Some(dir)
}

impl AudioLoader for SoundLibrary {
    fn load(&self, sound: &Sound) -> Result<Vec<u8>> {
        let path = self.resolve(&sound.audio).ok_or_else(|| {
            SnackError::playback(format!(
                "No audio file found for sound '{}'",
                sound.description
            ))
        })?;

        std::fs::read(&path).map_err(|e| {
            SnackError::playback(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}
