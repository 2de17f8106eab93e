//! Playback Events
//!
//! `PlaybackEvent`s tell the UI what changed. `SessionEvent`s travel the
//! other way: from an audio session back to the controller that owns it.

use serde::{Deserialize, Serialize};
use snack_core::SoundId;

use crate::types::{PlaybackState, SessionId};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Controller state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Sound reached its natural end
    SoundFinished {
        /// ID of the finished sound
        sound_id: SoundId,
    },

    /// Playback could not start
    Error {
        /// Sound that failed
        sound_id: SoundId,
        /// Human-readable reason
        message: String,
    },
}

/// Messages from the audio subsystem to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session played to the end
    Finished(SessionId),
}
