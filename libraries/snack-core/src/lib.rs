//! SoundSnacks Core
//!
//! Platform-agnostic domain types, traits, and error handling for SoundSnacks.
//!
//! This crate provides the building blocks shared by storage, playback, the
//! importer, and the soundboard services.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Category`, `Sound`, `AudioRef`
//! - **Core Traits**: `StorageContext` (persistence gateway), `AudioLoader`
//! - **Pure Logic**: drag reorder (`order`), color contrast (`color`), field
//!   validation (`validation`)
//! - **Error Handling**: Unified `SnackError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use snack_core::order::reorder;
//! use snack_core::types::{AudioRef, Sound};
//!
//! let a = Sound::new("Boo", AudioRef::bundled("boo"), "Gritos", 1);
//! let b = Sound::new("Hola", AudioRef::bundled("hola"), "Saludos", 2);
//!
//! // Drag "Hola" onto "Boo": "Hola" takes the first slot
//! let reordered = reorder(&[a.clone(), b.clone()], &b.id, &a.id).unwrap();
//! assert_eq!(reordered[0].id, b.id);
//! assert_eq!(reordered[0].order, 1);
//! assert_eq!(reordered[1].order, 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod error;
pub mod order;
pub mod storage;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use color::HexColor;
pub use error::{Result, SnackError};
pub use storage::StorageContext;
pub use traits::AudioLoader;

pub use types::{
    AudioRef, Category, CategoryId, CreateCategory, CreateSound, Sound, SoundId, UpdateCategory,
    UpdateSound, CATEGORY_PRESETS, DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_NAME,
};
