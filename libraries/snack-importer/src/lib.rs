//! SoundSnacks Importer
//!
//! Owns the on-disk side of the soundboard.
//!
//! # Architecture
//!
//! - `copy`: Copying a picked file into the sounds directory under a fresh name
//! - `sounds_dir`: The app-private "Sounds" directory (copy in, read, remove)
//! - `library`: Resolving a sound's audio reference to bytes, for playback

mod error;

pub mod copy;
pub mod library;
pub mod sounds_dir;

pub use copy::CopiedFile;
pub use error::ImportError;
pub use library::SoundLibrary;
pub use sounds_dir::SoundsDirectory;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
