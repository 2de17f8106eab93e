//! Sound types

use serde::{Deserialize, Serialize};

use super::SoundId;

/// Where a sound's audio bytes live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioRef {
    /// Asset shipped with the application, looked up by name
    Bundled { asset_name: String },

    /// File copied into the app-managed sounds directory
    Managed {
        file_name: String,
        extension: String,
    },
}

impl AudioRef {
    /// Reference to a bundled asset
    pub fn bundled(asset_name: impl Into<String>) -> Self {
        Self::Bundled {
            asset_name: asset_name.into(),
        }
    }

    /// Reference to a managed file
    pub fn managed(file_name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::Managed {
            file_name: file_name.into(),
            extension: extension.into(),
        }
    }

    /// File extension usable as a decoder hint, if known
    pub fn extension_hint(&self) -> Option<&str> {
        match self {
            Self::Bundled { asset_name } => std::path::Path::new(asset_name)
                .extension()
                .and_then(|e| e.to_str()),
            Self::Managed { extension, .. } => Some(extension.as_str()),
        }
    }

    /// Managed file name, if this sound owns a file in the sounds directory
    pub fn managed_file_name(&self) -> Option<&str> {
        match self {
            Self::Managed { file_name, .. } => Some(file_name.as_str()),
            Self::Bundled { .. } => None,
        }
    }
}

/// A named, categorized reference to an audio clip with a display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sound {
    pub id: SoundId,
    pub description: String,
    pub audio: AudioRef,
    /// Category *name*; may name a category that no longer exists
    pub category: String,
    /// 1-based display position
    pub order: u32,
    /// Imported by the user rather than bundled
    pub is_custom: bool,
    /// Unix epoch seconds
    pub created_at: i64,
}

impl Sound {
    /// Create a bundled (non-custom) sound with a fresh ID
    pub fn new(
        description: impl Into<String>,
        audio: AudioRef,
        category: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: SoundId::generate(),
            description: description.into(),
            audio,
            category: category.into(),
            order,
            is_custom: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Data for creating a new sound record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSound {
    pub description: String,
    pub audio: AudioRef,
    pub category: String,
    pub order: u32,
    pub is_custom: bool,
}

/// Editable fields of a sound record
///
/// The audio reference is deliberately absent: editing never moves or
/// renames the underlying file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSound {
    pub description: String,
    pub category: String,
    pub order: u32,
}
