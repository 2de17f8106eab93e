//! Sample-rate conversion for whole stereo clips

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::error::{AudioError, Result};

const CHANNELS: usize = 2;

/// Convert interleaved stereo `samples` from `source_rate` to `target_rate`
///
/// Returns the input untouched when the rates already match.
pub fn resample_stereo(samples: Vec<f32>, source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    if source_rate == target_rate || samples.is_empty() {
        return Ok(samples);
    }
    if source_rate == 0 || target_rate == 0 {
        return Err(AudioError::ResampleError(format!(
            "invalid rates {} -> {}",
            source_rate, target_rate
        )));
    }

    let frames = samples.len() / CHANNELS;

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(
        target_rate as f64 / source_rate as f64,
        2.0,
        params,
        frames,
        CHANNELS,
    )
    .map_err(|e| AudioError::ResampleError(e.to_string()))?;

    // Deinterleave input samples
    let mut deinterleaved = vec![Vec::with_capacity(frames); CHANNELS];
    for frame in samples.chunks_exact(CHANNELS) {
        for (ch, channel_vec) in deinterleaved.iter_mut().enumerate() {
            channel_vec.push(frame[ch]);
        }
    }

    let mut resampled = resampler
        .process(&deinterleaved, None)
        .map_err(|e| AudioError::ResampleError(e.to_string()))?;

    // Flush the filter tail
    let tail = resampler
        .process_partial(None::<&[Vec<f32>]>, None)
        .map_err(|e| AudioError::ResampleError(e.to_string()))?;
    for (channel, rest) in resampled.iter_mut().zip(tail) {
        channel.extend(rest);
    }

    // Interleave output samples
    let output_frames = resampled[0].len();
    let mut interleaved = Vec::with_capacity(output_frames * CHANNELS);
    for frame_idx in 0..output_frames {
        for channel_data in &resampled {
            interleaved.push(channel_data[frame_idx]);
        }
    }

    Ok(interleaved)
}
