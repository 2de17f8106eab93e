//! One sound on the output device
//!
//! **Architecture**: each session spawns a thread that owns its CPAL
//! `Stream`. The session handle talks to that thread through a channel,
//! avoiding Send/Sync issues with CPAL's `Stream` type across platforms.

use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{Device, StreamConfig};
use crossbeam_channel::{bounded, Receiver, Sender};
use snack_playback::{AudioSession, CompletionNotifier, PlaybackError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use crate::error::{AudioError, Result};

/// Commands sent to the session thread
enum SessionCommand {
    Play(Sender<Result<()>>),
    Pause(Sender<Result<()>>),
    Stop,
}

/// State shared between the handle and the audio callback
struct SessionState {
    /// Interleaved stereo samples at the device rate
    samples: Vec<f32>,
    /// Next sample to output (in samples, not frames)
    position: AtomicUsize,
    playing: AtomicBool,
    finished: AtomicBool,
    notifier: Mutex<Option<CompletionNotifier>>,
}

impl SessionState {
    fn notifier(&self) -> MutexGuard<'_, Option<CompletionNotifier>> {
        match self.notifier.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// CPAL-backed audio session
pub struct CpalSession {
    command_tx: Sender<SessionCommand>,
    state: Arc<SessionState>,
    thread: Option<JoinHandle<()>>,
}

impl CpalSession {
    /// Build a paused output stream for `samples` on its own thread
    ///
    /// # Arguments
    /// * `samples` - Interleaved stereo at `config`'s sample rate
    pub fn start(
        device: Device,
        config: StreamConfig,
        samples: Vec<f32>,
        notifier: CompletionNotifier,
    ) -> Result<Self> {
        let state = Arc::new(SessionState {
            samples,
            position: AtomicUsize::new(0),
            playing: AtomicBool::new(false),
            finished: AtomicBool::new(false),
            notifier: Mutex::new(Some(notifier)),
        });

        let (command_tx, command_rx) = bounded::<SessionCommand>(8);
        let (ready_tx, ready_rx) = bounded::<Result<()>>(1);

        let thread_state = Arc::clone(&state);
        let thread = thread::Builder::new()
            .name("snack-audio".to_string())
            .spawn(move || {
                run_stream(&device, &config, thread_state, &command_rx, &ready_tx);
            })
            .map_err(|e| AudioError::CpalError(e.to_string()))?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                command_tx,
                state,
                thread: Some(thread),
            }),
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(e)
            }
            Err(_) => Err(AudioError::ThreadStopped),
        }
    }

    fn request(&self, make: fn(Sender<Result<()>>) -> SessionCommand) -> Result<()> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx
            .send(make(reply_tx))
            .map_err(|_| AudioError::ThreadStopped)?;
        reply_rx.recv().map_err(|_| AudioError::ThreadStopped)?
    }

    fn shutdown(&mut self) {
        // Stopping disarms the completion first
        self.state.notifier().take();
        self.state.playing.store(false, Ordering::Release);

        if let Some(thread) = self.thread.take() {
            let _ = self.command_tx.send(SessionCommand::Stop);
            if thread.join().is_err() {
                tracing::error!("audio session thread panicked");
            }
        }
    }
}

impl AudioSession for CpalSession {
    fn play(&mut self) -> snack_playback::Result<()> {
        if self.state.finished.load(Ordering::Acquire) {
            return Err(PlaybackError::Session("session already finished".into()));
        }
        self.request(SessionCommand::Play).map_err(Into::into)
    }

    fn pause(&mut self) -> snack_playback::Result<()> {
        self.request(SessionCommand::Pause).map_err(Into::into)
    }

    fn stop(&mut self) {
        self.shutdown();
    }

    fn is_playing(&self) -> bool {
        self.state.playing.load(Ordering::Acquire)
    }
}

impl Drop for CpalSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Session thread main loop; owns the CPAL stream until `Stop`
fn run_stream(
    device: &Device,
    config: &StreamConfig,
    state: Arc<SessionState>,
    commands: &Receiver<SessionCommand>,
    ready: &Sender<Result<()>>,
) {
    let channels = config.channels as usize;
    let callback_state = Arc::clone(&state);

    let stream = match device.build_output_stream(
        config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            fill_output(data, channels, &callback_state);
        },
        |err| tracing::error!(error = %err, "audio stream error"),
        None,
    ) {
        Ok(stream) => stream,
        Err(e) => {
            let _ = ready.send(Err(e.into()));
            return;
        }
    };

    // Some hosts start streams immediately
    if let Err(e) = stream.pause() {
        tracing::debug!(error = %e, "stream does not support pausing before play");
    }
    let _ = ready.send(Ok(()));

    while let Ok(command) = commands.recv() {
        match command {
            SessionCommand::Play(reply) => {
                state.playing.store(true, Ordering::Release);
                let result = stream.play().map_err(AudioError::from);
                if result.is_err() {
                    state.playing.store(false, Ordering::Release);
                }
                let _ = reply.send(result);
            }
            SessionCommand::Pause(reply) => {
                state.playing.store(false, Ordering::Release);
                let _ = reply.send(stream.pause().map_err(AudioError::from));
            }
            SessionCommand::Stop => break,
        }
    }

    drop(stream);
    tracing::trace!("audio session thread exited");
}

/// Audio callback (runs in real-time audio thread)
///
/// Fires the completion exactly once, after the last sample was written.
fn fill_output(output: &mut [f32], channels: usize, state: &SessionState) {
    if channels == 0 || !state.playing.load(Ordering::Acquire) {
        output.fill(0.0);
        return;
    }

    let samples = &state.samples;
    let mut pos = state.position.load(Ordering::Relaxed);

    for frame in output.chunks_mut(channels) {
        if pos + 1 < samples.len() {
            write_frame(frame, samples[pos], samples[pos + 1]);
            pos += 2;
        } else {
            frame.fill(0.0);
        }
    }

    state.position.store(pos, Ordering::Relaxed);

    if pos + 1 >= samples.len() && !state.finished.swap(true, Ordering::AcqRel) {
        state.playing.store(false, Ordering::Release);
        if let Some(notifier) = state.notifier().take() {
            notifier.notify_finished();
        }
    }
}

/// Write one stereo frame to a device frame of any width
fn write_frame(frame: &mut [f32], left: f32, right: f32) {
    match frame {
        [mono] => *mono = (left + right) * 0.5,
        [l, r, rest @ ..] => {
            *l = left;
            *r = right;
            rest.fill(0.0);
        }
        [] => {}
    }
}
