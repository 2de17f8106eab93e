//! Audio subsystem traits
//!
//! Abstracts audio output for different platforms. The controller only ever
//! talks to these traits.

use crossbeam_channel::Sender;

use crate::error::Result;
use crate::events::SessionEvent;
use crate::types::SessionId;

/// Creates playback sessions from encoded audio
pub trait AudioBackend: Send {
    /// Decode `bytes` and prepare a paused session
    ///
    /// # Arguments
    /// * `bytes` - Complete encoded file (mp3, wav, m4a)
    /// * `hint` - File extension, if known
    /// * `notifier` - Fired by the session when it plays to the end
    ///
    /// # Returns
    /// * `Err(_)` - Undecodable data or no usable output device
    fn create_session(
        &mut self,
        bytes: Vec<u8>,
        hint: Option<&str>,
        notifier: CompletionNotifier,
    ) -> Result<Box<dyn AudioSession>>;
}

/// One loaded sound on the output device
///
/// Sessions start paused. A session fires its completion at most once, and
/// never after `stop`.
pub trait AudioSession: Send {
    /// Start or resume output from the current position
    fn play(&mut self) -> Result<()>;

    /// Pause output, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Stop output and release the device; the completion will not fire
    fn stop(&mut self);

    /// Whether output is currently running
    fn is_playing(&self) -> bool;
}

/// One-shot handle a session uses to report its natural end
#[derive(Debug)]
pub struct CompletionNotifier {
    session: SessionId,
    tx: Sender<SessionEvent>,
}

impl CompletionNotifier {
    pub fn new(session: SessionId, tx: Sender<SessionEvent>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Report that the session played to the end
    ///
    /// Consumes the notifier. A closed channel means the controller is gone
    /// and nothing is left to notify.
    pub fn notify_finished(self) {
        if self.tx.send(SessionEvent::Finished(self.session)).is_err() {
            tracing::trace!(session = %self.session, "completion dropped, controller gone");
        }
    }
}
