/// Core error types for SoundSnacks
use thiserror::Error;

/// Result type alias using `SnackError`
pub type Result<T> = std::result::Result<T, SnackError>;

/// Core error type for SoundSnacks
///
/// The variants follow how the soundboard surfaces failures:
/// validation and file system errors always reach the user, storage errors
/// reach the user only from add/edit flows, playback errors are only logged.
#[derive(Error, Debug)]
pub enum SnackError {
    /// Invalid user input (empty names, duplicates, bad order, protected records)
    #[error("{0}")]
    Validation(String),

    /// Persistence failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Missing or undecodable audio
    #[error("Playback error: {0}")]
    Playback(String),

    /// Copying or removing audio files failed
    #[error("File system error: {0}")]
    FileSystem(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl SnackError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Create a file system error
    pub fn file_system(msg: impl Into<String>) -> Self {
        Self::FileSystem(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Whether this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error came from the persistence layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Database(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for SnackError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = SnackError::validation("Name cannot be empty");
        assert_eq!(err.to_string(), "Name cannot be empty");
        assert!(err.is_validation());
        assert!(!err.is_storage());
    }

    #[test]
    fn database_errors_count_as_storage() {
        assert!(SnackError::Database("locked".into()).is_storage());
        assert!(SnackError::storage("disk full").is_storage());
    }

    #[test]
    fn not_found_names_entity() {
        let err = SnackError::not_found("Sound", "abc");
        assert_eq!(err.to_string(), "Sound not found: abc");
    }
}
