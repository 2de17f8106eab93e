//! SoundSnacks Board
//!
//! The soundboard's application services, written against
//! [`snack_core::StorageContext`] so any persistence backend works.
//!
//! - `categories`: create/rename/recolor/delete with name and default rules
//! - `sounds`: import, edit, delete and drag reorder of sound records
//! - `seed`: first-launch category presets
//! - `presentation`: tiles and fixed-column grid rows for the board view
//!
//! # Example
//!
//! ```rust,no_run
//! use snack_board::{seed_categories, CategoryService, SoundService};
//! use snack_importer::SoundsDirectory;
//! use snack_storage::{create_pool, run_migrations, LocalStorageContext};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://soundsnacks.db").await?;
//! run_migrations(&pool).await?;
//! let storage = Arc::new(LocalStorageContext::new(pool));
//!
//! seed_categories(storage.as_ref()).await?;
//!
//! let categories = CategoryService::new(Arc::clone(&storage));
//! categories.create("Alarmas", "#FF8800").await?;
//!
//! let sounds = SoundService::new(storage, SoundsDirectory::new("Sounds"));
//! let all = sounds.list().await?;
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod presentation;
pub mod seed;
pub mod sounds;

pub use categories::CategoryService;
pub use presentation::{category_color, grid_rows, tiles, SoundTile, DEFAULT_GRID_COLUMNS};
pub use seed::seed_categories;
pub use sounds::{EditSound, NewSound, SoundService};
