/// Blocking playback tests with an in-process audio backend
use snack_cli::player::play_to_end;
use snack_cli::render;
use snack_cli::PlayOutcome;
use snack_core::{AudioLoader, AudioRef, Result as SnackResult, SnackError, Sound};
use snack_playback::{AudioBackend, AudioSession, CompletionNotifier, PlaybackError, Result};

/// Sessions that finish as soon as they start
struct InstantBackend {
    reject: bool,
}

struct InstantSession {
    notifier: Option<CompletionNotifier>,
}

impl AudioBackend for InstantBackend {
    fn create_session(
        &mut self,
        _bytes: Vec<u8>,
        _hint: Option<&str>,
        notifier: CompletionNotifier,
    ) -> Result<Box<dyn AudioSession>> {
        if self.reject {
            return Err(PlaybackError::Decode("not audio".to_string()));
        }
        Ok(Box::new(InstantSession {
            notifier: Some(notifier),
        }))
    }
}

impl AudioSession for InstantSession {
    fn play(&mut self) -> Result<()> {
        if let Some(notifier) = self.notifier.take() {
            notifier.notify_finished();
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {
        self.notifier = None;
    }

    fn is_playing(&self) -> bool {
        false
    }
}

/// Loader with a single known clip
struct OneClip {
    known: bool,
}

impl AudioLoader for OneClip {
    fn load(&self, sound: &Sound) -> SnackResult<Vec<u8>> {
        if self.known {
            Ok(vec![0; 16])
        } else {
            Err(SnackError::playback(format!("no audio for {}", sound.id)))
        }
    }
}

fn sound() -> Sound {
    Sound::new("Boom", AudioRef::bundled("boom"), "Golpes", 1)
}

#[test]
fn test_play_to_end_finishes() {
    let outcome = play_to_end(InstantBackend { reject: false }, OneClip { known: true }, sound()).unwrap();

    assert_eq!(outcome, PlayOutcome::Finished);
}

#[test]
fn test_missing_audio_fails() {
    let outcome = play_to_end(InstantBackend { reject: false }, OneClip { known: false }, sound()).unwrap();

    assert!(matches!(outcome, PlayOutcome::Failed(message) if message.contains("no audio")));
}

#[test]
fn test_rejected_session_fails() {
    let outcome = play_to_end(InstantBackend { reject: true }, OneClip { known: true }, sound()).unwrap();

    assert!(matches!(outcome, PlayOutcome::Failed(message) if message.contains("not audio")));
}

#[test]
fn test_outcome_json_shape() {
    assert_eq!(
        serde_json::to_string(&PlayOutcome::Finished).unwrap(),
        r#"{"outcome":"finished"}"#
    );
    assert_eq!(
        serde_json::to_string(&PlayOutcome::Failed("x".to_string())).unwrap(),
        r#"{"outcome":"failed","message":"x"}"#
    );
}

#[test]
fn test_failed_playback_is_reported_not_raised() {
    let result = play_to_end(InstantBackend { reject: true }, OneClip { known: true }, sound());

    let outcome = result.expect("a rejected clip is an outcome, not a command error");
    assert_eq!(
        render::play_outcome(&outcome),
        "failed: Decode error: not audio\n"
    );
    assert_eq!(render::play_outcome(&PlayOutcome::Finished), "finished\n");
}
