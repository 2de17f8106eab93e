//! CPAL audio backend

use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Device, StreamConfig};
use snack_playback::{AudioBackend, AudioSession, CompletionNotifier};

use crate::decode::decode;
use crate::error::{AudioError, Result};
use crate::resample::resample_stereo;
use crate::session::CpalSession;

/// Plays clips on the default output device
///
/// Each `create_session` decodes the clip, converts it to the device rate,
/// and opens a dedicated stream for it.
pub struct CpalBackend {
    device: Device,
    config: StreamConfig,
    sample_rate: u32,
}

impl CpalBackend {
    /// Create a backend using the default audio device
    ///
    /// # Errors
    /// Returns an error if no audio device is found or configuration fails
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::DeviceNotFound)?;

        let supported = device.default_output_config()?;
        let sample_rate = supported.sample_rate();
        let config = supported.config();

        tracing::info!(
            sample_rate,
            channels = config.channels,
            "audio output ready"
        );

        Ok(Self {
            device,
            config,
            sample_rate,
        })
    }

    /// Output sample rate of the device
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Decode and convert a clip for this device
    pub fn prepare(&self, bytes: Vec<u8>, hint: Option<&str>) -> Result<Vec<f32>> {
        let decoded = decode(bytes, hint)?;
        resample_stereo(decoded.samples, decoded.sample_rate, self.sample_rate)
    }
}

impl AudioBackend for CpalBackend {
    fn create_session(
        &mut self,
        bytes: Vec<u8>,
        hint: Option<&str>,
        notifier: CompletionNotifier,
    ) -> snack_playback::Result<Box<dyn AudioSession>> {
        let samples = self.prepare(bytes, hint)?;
        let session = CpalSession::start(
            self.device.clone(),
            self.config.clone(),
            samples,
            notifier,
        )?;
        Ok(Box::new(session))
    }
}
