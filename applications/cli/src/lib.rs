//! SoundSnacks CLI Library
//!
//! Headless host for the soundboard: configuration, state wiring, terminal
//! rendering and blocking playback. The binary in `main.rs` maps commands
//! onto these pieces; they are exposed here for testing.

pub mod config;
pub mod error;
pub mod player;
pub mod render;
pub mod state;

// Re-export commonly used types for convenience
pub use config::SnacksConfig;
pub use error::{CliError, Result};
pub use player::PlayOutcome;
pub use state::AppState;
