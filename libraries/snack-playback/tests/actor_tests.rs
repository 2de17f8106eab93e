//! Playback actor tests: commands and completions through channels


use snack_playback::{PlaybackActor, PlaybackController, PlaybackEvent, PlaybackState};
use std::time::Duration;
use test_helpers::{sound, FakeBackend, MapLoader};

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_commands_are_applied_in_order() {
    let backend = FakeBackend::new();
    let loader = MapLoader::default();
    let a = sound("A");
    loader.with(&a, b"a");

    let handle = PlaybackActor::spawn(PlaybackController::new(backend, loader));

    handle.toggle(a.clone()).unwrap();
    assert_eq!(handle.state().unwrap(), PlaybackState::Playing(a.id.clone()));

    handle.pause().unwrap();
    assert_eq!(handle.state().unwrap(), PlaybackState::Paused(a.id.clone()));

    handle.stop().unwrap();
    assert_eq!(handle.state().unwrap(), PlaybackState::Idle);

    handle.shutdown();
}

#[test]
fn test_completion_reaches_event_stream() {
    let backend = FakeBackend::new();
    let loader = MapLoader::default();
    let a = sound("A");
    loader.with(&a, b"a");

    let handle = PlaybackActor::spawn(PlaybackController::new(backend.clone(), loader));
    handle.play(a.clone()).unwrap();
    // Round trip guarantees the session exists
    handle.state().unwrap();

    backend.finish(0);

    let finished = loop {
        match handle.events().recv_timeout(TIMEOUT) {
            Ok(PlaybackEvent::SoundFinished { sound_id }) => break sound_id,
            Ok(_) => continue,
            Err(e) => panic!("no completion event: {}", e),
        }
    };
    assert_eq!(finished, a.id);
    assert_eq!(handle.state().unwrap(), PlaybackState::Idle);
}

#[test]
fn test_failed_play_reports_error_event() {
    let handle = PlaybackActor::spawn(PlaybackController::new(
        FakeBackend::new(),
        MapLoader::default(),
    ));
    let ghost = sound("Ghost");

    handle.toggle(ghost.clone()).unwrap();

    let event = handle.events().recv_timeout(TIMEOUT).unwrap();
    assert!(matches!(event, PlaybackEvent::Error { sound_id, .. } if sound_id == ghost.id));
    assert_eq!(handle.state().unwrap(), PlaybackState::Idle);
}

#[test]
fn test_drop_stops_active_session() {
    let backend = FakeBackend::new();
    let loader = MapLoader::default();
    let a = sound("A");
    loader.with(&a, b"a");

    {
        let handle = PlaybackActor::spawn(PlaybackController::new(backend.clone(), loader));
        handle.play(a).unwrap();
        handle.state().unwrap();
    }

    assert!(backend.session(0).lock().unwrap().stopped);
}
