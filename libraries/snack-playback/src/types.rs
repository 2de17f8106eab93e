//! Playback state types

use serde::{Deserialize, Serialize};
use snack_core::SoundId;
use std::fmt;

/// Controller state; at most one sound is active
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded
    #[default]
    Idle,

    /// Sound is audible
    Playing(SoundId),

    /// Sound is loaded and paused at its current position
    Paused(SoundId),
}

impl PlaybackState {
    /// Sound currently loaded, playing or paused
    pub fn active_sound(&self) -> Option<&SoundId> {
        match self {
            Self::Idle => None,
            Self::Playing(id) | Self::Paused(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_playing(&self, id: &SoundId) -> bool {
        matches!(self, Self::Playing(current) if current == id)
    }

    pub fn is_paused(&self, id: &SoundId) -> bool {
        matches!(self, Self::Paused(current) if current == id)
    }
}

/// Identifies one audio session
///
/// Completions carry it so the controller can ignore sessions it already
/// replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The id following this one
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_match_only_active_sound() {
        let a = SoundId::new("a");
        let b = SoundId::new("b");

        let playing = PlaybackState::Playing(a.clone());
        assert!(playing.is_playing(&a));
        assert!(!playing.is_playing(&b));
        assert!(!playing.is_paused(&a));
        assert_eq!(playing.active_sound(), Some(&a));

        let paused = PlaybackState::Paused(a.clone());
        assert!(paused.is_paused(&a));
        assert!(!paused.is_playing(&a));

        assert!(PlaybackState::default().is_idle());
        assert_eq!(PlaybackState::Idle.active_sound(), None);
    }

    #[test]
    fn test_session_ids_advance() {
        let first = SessionId::new(1);
        assert_eq!(first.next().value(), 2);
        assert_eq!(first.to_string(), "session-1");
    }
}
