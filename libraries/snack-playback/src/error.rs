//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Audio bytes could not be loaded
    #[error("Failed to load audio: {0}")]
    Load(String),

    /// Audio bytes could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Audio output failed (no device, stream error)
    #[error("Audio output error: {0}")]
    Output(String),

    /// Session control failed
    #[error("Session error: {0}")]
    Session(String),

    /// The playback actor is no longer running
    #[error("Playback actor has stopped")]
    ActorStopped,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<PlaybackError> for snack_core::SnackError {
    fn from(err: PlaybackError) -> Self {
        snack_core::SnackError::playback(err.to_string())
    }
}
