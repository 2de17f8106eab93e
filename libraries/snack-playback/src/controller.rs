//! Playback controller - the single-session state machine
//!
//! Owns at most one audio session. Every mutation happens through `&mut self`;
//! the audio subsystem only reaches the controller through the completion
//! channel, which the owner drains with [`PlaybackController::process_events`]
//! or [`PlaybackController::handle_session_event`].

use crossbeam_channel::{unbounded, Receiver, Sender};
use snack_core::{AudioLoader, Sound, SoundId};

use crate::backend::{AudioBackend, AudioSession, CompletionNotifier};
use crate::error::{PlaybackError, Result};
use crate::events::{PlaybackEvent, SessionEvent};
use crate::types::{PlaybackState, SessionId};

struct ActiveSession {
    id: SessionId,
    sound_id: SoundId,
    session: Box<dyn AudioSession>,
}

/// Soundboard playback controller
pub struct PlaybackController<B, L> {
    backend: B,
    loader: L,
    state: PlaybackState,
    active: Option<ActiveSession>,
    last_session: SessionId,

    completion_tx: Sender<SessionEvent>,
    completion_rx: Receiver<SessionEvent>,

    // Events waiting to be drained by the owner
    pending_events: Vec<PlaybackEvent>,
}

impl<B: AudioBackend, L: AudioLoader> PlaybackController<B, L> {
    pub fn new(backend: B, loader: L) -> Self {
        let (completion_tx, completion_rx) = unbounded();
        Self {
            backend,
            loader,
            state: PlaybackState::Idle,
            active: None,
            last_session: SessionId::new(0),
            completion_tx,
            completion_rx,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play `sound` from the beginning
    ///
    /// Audio is loaded before anything else happens: if it is missing the
    /// current state is left alone. Otherwise the active session is stopped
    /// and a fresh one replaces it. If the new session cannot start the
    /// controller ends `Idle`.
    pub fn play(&mut self, sound: &Sound) -> Result<()> {
        let bytes = match self.loader.load(sound) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(sound = %sound.id, error = %e, "audio data unavailable");
                let err = PlaybackError::Load(e.to_string());
                self.emit_error(&sound.id, &err);
                return Err(err);
            }
        };

        self.stop_active();

        let session_id = self.last_session.next();
        self.last_session = session_id;
        let notifier = CompletionNotifier::new(session_id, self.completion_tx.clone());

        let started = self
            .backend
            .create_session(bytes, sound.audio.extension_hint(), notifier)
            .and_then(|mut session| session.play().map(|()| session));

        match started {
            Ok(session) => {
                tracing::debug!(sound = %sound.id, session = %session_id, "playback started");
                self.active = Some(ActiveSession {
                    id: session_id,
                    sound_id: sound.id.clone(),
                    session,
                });
                self.set_state(PlaybackState::Playing(sound.id.clone()));
                Ok(())
            }
            Err(e) => {
                tracing::error!(sound = %sound.id, error = %e, "failed to start playback");
                self.set_state(PlaybackState::Idle);
                self.emit_error(&sound.id, &e);
                Err(e)
            }
        }
    }

    /// React to a tap on `sound`'s tile
    ///
    /// - another sound active: stop it and play this one
    /// - this sound playing: restart from the beginning
    /// - this sound paused: resume where it left off
    /// - idle: play
    pub fn toggle(&mut self, sound: &Sound) -> Result<()> {
        if self.state.is_paused(&sound.id) {
            return self.resume();
        }

        let switching = self
            .state
            .active_sound()
            .is_some_and(|current| current != &sound.id);
        if switching {
            self.stop();
        }

        self.play(sound)
    }

    /// Pause the playing sound; no-op otherwise
    pub fn pause(&mut self) -> Result<()> {
        let PlaybackState::Playing(sound_id) = self.state.clone() else {
            return Ok(());
        };

        if let Some(active) = self.active.as_mut() {
            active.session.pause()?;
        }
        self.set_state(PlaybackState::Paused(sound_id));
        Ok(())
    }

    /// Stop whatever is active and go `Idle`
    pub fn stop(&mut self) {
        self.stop_active();
        self.set_state(PlaybackState::Idle);
    }

    fn resume(&mut self) -> Result<()> {
        let PlaybackState::Paused(sound_id) = self.state.clone() else {
            return Ok(());
        };

        let resumed = match self.active.as_mut() {
            Some(active) => active.session.play(),
            None => Err(PlaybackError::Session("no session to resume".to_string())),
        };

        match resumed {
            Ok(()) => {
                self.set_state(PlaybackState::Playing(sound_id));
                Ok(())
            }
            Err(e) => {
                tracing::error!(sound = %sound_id, error = %e, "failed to resume playback");
                self.stop();
                self.emit_error(&sound_id, &e);
                Err(e)
            }
        }
    }

    fn stop_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            tracing::debug!(sound = %active.sound_id, session = %active.id, "stopping session");
            active.session.stop();
        }
    }

    // ===== Completion Handling =====

    /// Apply a message from the audio subsystem
    ///
    /// Completions for sessions that were already replaced are ignored.
    pub fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Finished(session_id) => {
                let is_current = self.active.as_ref().is_some_and(|a| a.id == session_id);
                if !is_current {
                    tracing::trace!(session = %session_id, "ignoring stale completion");
                    return;
                }

                if let Some(active) = self.active.take() {
                    tracing::debug!(sound = %active.sound_id, "sound finished");
                    self.pending_events.push(PlaybackEvent::SoundFinished {
                        sound_id: active.sound_id,
                    });
                }
                self.set_state(PlaybackState::Idle);
            }
        }
    }

    /// Apply every completion waiting on the channel
    ///
    /// Returns the number of messages processed.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.completion_rx.try_recv() {
            self.handle_session_event(event);
            processed += 1;
        }
        processed
    }

    /// Receiver side of the completion channel, for `select!` loops
    pub fn completion_receiver(&self) -> Receiver<SessionEvent> {
        self.completion_rx.clone()
    }

    // ===== State Queries =====

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self, id: &SoundId) -> bool {
        self.state.is_playing(id)
    }

    pub fn is_paused(&self, id: &SoundId) -> bool {
        self.state.is_paused(id)
    }

    /// Current session, if any
    pub fn current_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.id)
    }

    // ===== Events =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state.clone();
            self.pending_events
                .push(PlaybackEvent::StateChanged { state });
        }
    }

    fn emit_error(&mut self, sound_id: &SoundId, err: &PlaybackError) {
        self.pending_events.push(PlaybackEvent::Error {
            sound_id: sound_id.clone(),
            message: err.to_string(),
        });
    }
}
