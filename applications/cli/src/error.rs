/// Host error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Snack(#[from] snack_core::SnackError),

    #[error("Sound not found: {0}")]
    SoundNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Audio output unavailable: {0}")]
    Audio(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<snack_storage::StorageError> for CliError {
    fn from(err: snack_storage::StorageError) -> Self {
        // StorageError -> SnackError -> CliError
        CliError::Snack(err.into())
    }
}

impl From<snack_playback::PlaybackError> for CliError {
    fn from(err: snack_playback::PlaybackError) -> Self {
        CliError::Snack(err.into())
    }
}

impl From<snack_importer::ImportError> for CliError {
    fn from(err: snack_importer::ImportError) -> Self {
        CliError::Snack(err.into())
    }
}

impl From<snack_audio_desktop::AudioError> for CliError {
    fn from(err: snack_audio_desktop::AudioError) -> Self {
        CliError::Audio(err.to_string())
    }
}
