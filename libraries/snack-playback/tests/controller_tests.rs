//! Controller state machine tests against a fake audio backend


use snack_playback::{PlaybackController, PlaybackEvent, PlaybackState, SessionEvent};
use test_helpers::{sound, FakeBackend, MapLoader};

fn controller() -> (PlaybackController<FakeBackend, MapLoader>, FakeBackend, MapLoader) {
    let backend = FakeBackend::new();
    let loader = MapLoader::default();
    let controller = PlaybackController::new(backend.clone(), loader.clone());
    (controller, backend, loader)
}

#[test]
fn test_toggle_from_idle_plays() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    loader.with(&a, b"aaaa");

    ctl.toggle(&a).unwrap();

    assert_eq!(ctl.state(), &PlaybackState::Playing(a.id.clone()));
    assert!(ctl.is_playing(&a.id));
    let record = backend.session(0);
    let record = record.lock().unwrap();
    assert_eq!(record.bytes, b"aaaa");
    assert_eq!(record.hint.as_deref(), Some("wav"));
    assert!(record.playing);
}

#[test]
fn test_toggle_other_sound_switches() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    let b = sound("B");
    loader.with(&a, b"a").with(&b, b"b");

    ctl.toggle(&a).unwrap();
    ctl.toggle(&b).unwrap();

    assert_eq!(ctl.state(), &PlaybackState::Playing(b.id.clone()));
    assert!(!ctl.is_playing(&a.id));
    assert!(backend.session(0).lock().unwrap().stopped);
    assert!(backend.session(1).lock().unwrap().playing);
}

#[test]
fn test_toggle_same_sound_restarts_with_fresh_session() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    loader.with(&a, b"a");

    ctl.toggle(&a).unwrap();
    let first = ctl.current_session();
    ctl.toggle(&a).unwrap();

    assert_eq!(ctl.state(), &PlaybackState::Playing(a.id.clone()));
    assert_eq!(backend.session_count(), 2);
    assert!(backend.session(0).lock().unwrap().stopped);
    assert_ne!(ctl.current_session(), first);
}

#[test]
fn test_pause_then_toggle_resumes_same_session() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    loader.with(&a, b"a");

    ctl.toggle(&a).unwrap();
    ctl.pause().unwrap();
    assert_eq!(ctl.state(), &PlaybackState::Paused(a.id.clone()));
    assert!(ctl.is_paused(&a.id));

    ctl.toggle(&a).unwrap();

    assert_eq!(ctl.state(), &PlaybackState::Playing(a.id.clone()));
    assert_eq!(backend.session_count(), 1, "resume must not restart");
    let record = backend.session(0);
    let record = record.lock().unwrap();
    assert_eq!(record.play_calls, 2);
    assert_eq!(record.pause_calls, 1);
}

#[test]
fn test_toggle_other_sound_while_paused_switches() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    let b = sound("B");
    loader.with(&a, b"a").with(&b, b"b");

    ctl.toggle(&a).unwrap();
    ctl.pause().unwrap();
    ctl.toggle(&b).unwrap();

    assert_eq!(ctl.state(), &PlaybackState::Playing(b.id.clone()));
    assert!(backend.session(0).lock().unwrap().stopped);
}

#[test]
fn test_pause_when_idle_is_noop() {
    let (mut ctl, _backend, _loader) = controller();
    ctl.pause().unwrap();
    assert_eq!(ctl.state(), &PlaybackState::Idle);
    assert!(!ctl.has_pending_events());
}

#[test]
fn test_natural_completion_returns_to_idle() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    loader.with(&a, b"a");

    ctl.toggle(&a).unwrap();
    ctl.drain_events();
    backend.finish(0);

    assert_eq!(ctl.process_events(), 1);
    assert_eq!(ctl.state(), &PlaybackState::Idle);
    assert_eq!(
        ctl.drain_events(),
        vec![
            PlaybackEvent::SoundFinished {
                sound_id: a.id.clone()
            },
            PlaybackEvent::StateChanged {
                state: PlaybackState::Idle
            },
        ]
    );
}

#[test]
fn test_stale_completion_is_ignored() {
    let (mut ctl, _backend, loader) = controller();
    let a = sound("A");
    let b = sound("B");
    loader.with(&a, b"a").with(&b, b"b");

    ctl.toggle(&a).unwrap();
    let stale = ctl.current_session().unwrap();
    ctl.toggle(&b).unwrap();

    ctl.handle_session_event(SessionEvent::Finished(stale));

    assert_eq!(ctl.state(), &PlaybackState::Playing(b.id.clone()));
}

#[test]
fn test_stopped_session_never_completes() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    loader.with(&a, b"a");

    ctl.toggle(&a).unwrap();
    ctl.stop();
    backend.finish(0);

    assert_eq!(ctl.process_events(), 0);
    assert_eq!(ctl.state(), &PlaybackState::Idle);
}

#[test]
fn test_missing_bytes_leaves_state_unchanged() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    let ghost = sound("Ghost");
    loader.with(&a, b"a");

    ctl.play(&a).unwrap();
    assert!(ctl.play(&ghost).is_err());

    assert_eq!(ctl.state(), &PlaybackState::Playing(a.id.clone()));
    assert_eq!(backend.session_count(), 1);
    assert!(ctl
        .drain_events()
        .iter()
        .any(|e| matches!(e, PlaybackEvent::Error { sound_id, .. } if sound_id == &ghost.id)));
}

#[test]
fn test_toggle_to_missing_sound_ends_idle() {
    let (mut ctl, _backend, loader) = controller();
    let a = sound("A");
    let ghost = sound("Ghost");
    loader.with(&a, b"a");

    ctl.toggle(&a).unwrap();
    assert!(ctl.toggle(&ghost).is_err());

    assert_eq!(ctl.state(), &PlaybackState::Idle);
}

#[test]
fn test_backend_rejection_ends_idle() {
    let (mut ctl, backend, loader) = controller();
    let a = sound("A");
    let b = sound("B");
    loader.with(&a, b"a").with(&b, b"b");

    ctl.toggle(&a).unwrap();
    backend.fail_next_session();
    assert!(ctl.toggle(&b).is_err());

    assert_eq!(ctl.state(), &PlaybackState::Idle);
    assert!(ctl.current_session().is_none());
    assert!(backend.session(0).lock().unwrap().stopped);
}

#[test]
fn test_state_events_are_emitted_once_per_transition() {
    let (mut ctl, _backend, loader) = controller();
    let a = sound("A");
    loader.with(&a, b"a");

    ctl.toggle(&a).unwrap();
    ctl.pause().unwrap();
    ctl.stop();

    assert_eq!(
        ctl.drain_events(),
        vec![
            PlaybackEvent::StateChanged {
                state: PlaybackState::Playing(a.id.clone())
            },
            PlaybackEvent::StateChanged {
                state: PlaybackState::Paused(a.id.clone())
            },
            PlaybackEvent::StateChanged {
                state: PlaybackState::Idle
            },
        ]
    );
}
