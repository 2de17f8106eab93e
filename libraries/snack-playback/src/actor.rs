//! Playback actor
//!
//! Moves a [`PlaybackController`] onto a dedicated thread. The thread is the
//! only writer of playback state: commands and audio completions both arrive
//! as channel messages and are applied in order.

use crossbeam_channel::{bounded, select, Receiver, Sender, TrySendError};
use snack_core::{AudioLoader, Sound};
use std::thread::{self, JoinHandle};

use crate::backend::AudioBackend;
use crate::controller::PlaybackController;
use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::types::PlaybackState;

/// Commands accepted by the playback thread
enum PlaybackCommand {
    Play(Sound),
    Toggle(Sound),
    Pause,
    Stop,
    State(Sender<PlaybackState>),
    Shutdown,
}

/// Spawns the playback thread
pub struct PlaybackActor;

impl PlaybackActor {
    /// Start the playback thread and return a handle to it
    pub fn spawn<B, L>(mut controller: PlaybackController<B, L>) -> PlaybackHandle
    where
        B: AudioBackend + 'static,
        L: AudioLoader + 'static,
    {
        let (command_tx, command_rx) = bounded::<PlaybackCommand>(32);
        let (event_tx, event_rx) = bounded::<PlaybackEvent>(64);

        let thread = thread::Builder::new()
            .name("snack-playback".to_string())
            .spawn(move || {
                run(&mut controller, &command_rx, &event_tx);
                controller.stop();
                forward_events(&mut controller, &event_tx);
                tracing::debug!("playback thread exited");
            });

        let thread = match thread {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn playback thread");
                None
            }
        };

        PlaybackHandle {
            command_tx,
            event_rx,
            thread,
        }
    }
}

fn run<B: AudioBackend, L: AudioLoader>(
    controller: &mut PlaybackController<B, L>,
    commands: &Receiver<PlaybackCommand>,
    events: &Sender<PlaybackEvent>,
) {
    let completions = controller.completion_receiver();

    loop {
        select! {
            recv(commands) -> msg => {
                let Ok(command) = msg else { break };
                if !apply(controller, command) {
                    break;
                }
            }
            recv(completions) -> msg => {
                if let Ok(event) = msg {
                    controller.handle_session_event(event);
                }
            }
        }

        forward_events(controller, events);
    }
}

/// Returns `false` when the loop should exit
fn apply<B: AudioBackend, L: AudioLoader>(
    controller: &mut PlaybackController<B, L>,
    command: PlaybackCommand,
) -> bool {
    // Failures are already logged and surfaced as `PlaybackEvent::Error`
    match command {
        PlaybackCommand::Play(sound) => {
            let _ = controller.play(&sound);
        }
        PlaybackCommand::Toggle(sound) => {
            let _ = controller.toggle(&sound);
        }
        PlaybackCommand::Pause => {
            if let Err(e) = controller.pause() {
                tracing::warn!(error = %e, "pause failed");
            }
        }
        PlaybackCommand::Stop => controller.stop(),
        PlaybackCommand::State(reply) => {
            let _ = reply.send(controller.state().clone());
        }
        PlaybackCommand::Shutdown => return false,
    }
    true
}

fn forward_events<B: AudioBackend, L: AudioLoader>(
    controller: &mut PlaybackController<B, L>,
    events: &Sender<PlaybackEvent>,
) {
    for event in controller.drain_events() {
        match events.try_send(event) {
            Ok(()) | Err(TrySendError::Disconnected(_)) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "event channel full, dropping event");
            }
        }
    }
}

/// Handle to the playback thread
///
/// Dropping the handle shuts the thread down.
pub struct PlaybackHandle {
    command_tx: Sender<PlaybackCommand>,
    event_rx: Receiver<PlaybackEvent>,
    thread: Option<JoinHandle<()>>,
}

impl PlaybackHandle {
    /// Play a sound from the beginning
    pub fn play(&self, sound: Sound) -> Result<()> {
        self.send(PlaybackCommand::Play(sound))
    }

    /// Tap semantics: switch, restart or resume
    pub fn toggle(&self, sound: Sound) -> Result<()> {
        self.send(PlaybackCommand::Toggle(sound))
    }

    /// Pause the playing sound
    pub fn pause(&self) -> Result<()> {
        self.send(PlaybackCommand::Pause)
    }

    /// Stop playback
    pub fn stop(&self) -> Result<()> {
        self.send(PlaybackCommand::Stop)
    }

    /// Current state, after every command sent so far has been applied
    pub fn state(&self) -> Result<PlaybackState> {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(PlaybackCommand::State(reply_tx))?;
        reply_rx.recv().map_err(|_| PlaybackError::ActorStopped)
    }

    /// Event receiver, for `select!` loops
    pub fn events(&self) -> &Receiver<PlaybackEvent> {
        &self.event_rx
    }

    /// Try to receive an event (non-blocking)
    pub fn try_recv_event(&self) -> Option<PlaybackEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Receive an event (blocking)
    pub fn recv_event(&self) -> Option<PlaybackEvent> {
        self.event_rx.recv().ok()
    }

    /// Stop playback and join the thread
    pub fn shutdown(mut self) {
        self.shutdown_thread();
    }

    fn send(&self, command: PlaybackCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| PlaybackError::ActorStopped)
    }

    fn shutdown_thread(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.command_tx.send(PlaybackCommand::Shutdown);
            if thread.join().is_err() {
                tracing::error!("playback thread panicked");
            }
        }
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.shutdown_thread();
    }
}
