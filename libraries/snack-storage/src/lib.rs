//! SoundSnacks Storage
//!
//! `SQLite` persistence for categories and sound records.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each record kind owns its own queries
//! - **Name-linked**: Sounds reference categories by name, so deleting a
//!   category never touches sound rows
//! - **Atomic Reorder**: Display order batches are written in one transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use snack_storage::{LocalStorageContext, create_pool, run_migrations};
//! use snack_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://soundsnacks.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let sounds = storage.get_all_sounds().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod categories;
pub mod sounds;

pub use context::LocalStorageContext;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup; already-applied migrations are skipped.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://soundsnacks.db`)
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = database_url, "creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(format!("{}: {}", database_url, e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!(url = database_url, "database ready");

    Ok(pool)
}
