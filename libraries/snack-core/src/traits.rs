/// Core traits for SoundSnacks
use crate::error::Result;
use crate::types::Sound;

/// Resolves a sound's audio reference to its raw bytes
///
/// Implementers know where bundled assets and imported files live. A missing
/// file is an error the caller logs; it never panics.
pub trait AudioLoader: Send + Sync {
    /// Read the complete encoded audio for `sound`
    ///
    /// # Errors
    /// Returns an error if no file backs the sound's audio reference or it
    /// cannot be read
    fn load(&self, sound: &Sound) -> Result<Vec<u8>>;
}
