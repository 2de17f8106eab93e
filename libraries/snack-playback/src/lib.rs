//! SoundSnacks - Playback Control
//!
//! Platform-agnostic playback control for the soundboard.
//!
//! This crate provides:
//! - A single-session state machine (`Idle`, `Playing`, `Paused`)
//! - Toggle semantics for tapping a tile (switch, restart, resume)
//! - Completion handling through a channel, with stale sessions ignored
//! - An actor that owns the controller on its own thread
//!
//! # Architecture
//!
//! `snack-playback` does not depend on any audio library. The audio
//! subsystem is provided via the [`AudioBackend`] and [`AudioSession`]
//! traits; audio bytes come from a [`snack_core::AudioLoader`].
//!
//! # Example
//!
//! ```rust,no_run
//! use snack_playback::{PlaybackActor, PlaybackController, PlaybackEvent};
//! # use snack_playback::{AudioBackend, Result};
//! # use snack_core::{AudioLoader, Sound};
//! # fn example<B: AudioBackend + 'static, L: AudioLoader + 'static>(
//! #     backend: B, loader: L, sound: Sound,
//! # ) -> Result<()> {
//! let handle = PlaybackActor::spawn(PlaybackController::new(backend, loader));
//!
//! handle.toggle(sound)?;
//! while let Some(event) = handle.recv_event() {
//!     if let PlaybackEvent::SoundFinished { .. } = event {
//!         break;
//!     }
//! }
//! handle.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod backend;
pub mod controller;
pub mod error;
pub mod events;
pub mod types;

pub use actor::{PlaybackActor, PlaybackHandle};
pub use backend::{AudioBackend, AudioSession, CompletionNotifier};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, SessionEvent};
pub use types::{PlaybackState, SessionId};
