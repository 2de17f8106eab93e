//! Blocking playback for the `play` command

use serde::Serialize;
use snack_audio_desktop::CpalBackend;
use snack_core::{AudioLoader, Sound, SoundId};
use snack_playback::{AudioBackend, PlaybackActor, PlaybackController, PlaybackEvent, PlaybackHandle};

use crate::error::Result;

/// How a `play` command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum PlayOutcome {
    /// The sound played to the end
    Finished,
    /// Playback never started or broke off
    Failed(String),
}

/// Play `sound` on the default output device and block until it ends
pub fn play_on_default_output<L>(loader: L, sound: Sound) -> Result<PlayOutcome>
where
    L: AudioLoader + 'static,
{
    let backend = CpalBackend::new()?;
    tracing::info!(sample_rate = backend.sample_rate(), "audio output ready");
    play_to_end(backend, loader, sound)
}

/// Play `sound` through `backend` on a playback actor and wait for the end
pub fn play_to_end<B, L>(backend: B, loader: L, sound: Sound) -> Result<PlayOutcome>
where
    B: AudioBackend + 'static,
    L: AudioLoader + 'static,
{
    let handle = PlaybackActor::spawn(PlaybackController::new(backend, loader));
    let sound_id = sound.id.clone();

    handle.play(sound)?;
    let outcome = wait_for_outcome(&handle, &sound_id);

    handle.shutdown();
    Ok(outcome)
}

/// Block on the event stream until `sound_id` finishes or fails
pub fn wait_for_outcome(handle: &PlaybackHandle, sound_id: &SoundId) -> PlayOutcome {
    while let Some(event) = handle.recv_event() {
        match event {
            PlaybackEvent::SoundFinished { sound_id: finished } if &finished == sound_id => {
                return PlayOutcome::Finished;
            }
            PlaybackEvent::Error {
                sound_id: failed,
                message,
            } if &failed == sound_id => {
                return PlayOutcome::Failed(message);
            }
            PlaybackEvent::StateChanged { state } => {
                tracing::debug!(?state, "playback state");
            }
            other => tracing::trace!(?other, "ignoring event"),
        }
    }

    PlayOutcome::Failed("playback stopped unexpectedly".to_string())
}
