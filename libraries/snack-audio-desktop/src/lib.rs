//! SoundSnacks Desktop Audio
//!
//! Desktop implementation of the `snack-playback` audio traits.
//!
//! - `decode`: Symphonia decoding of whole clips to interleaved stereo f32
//! - `resample`: Rubato sample-rate conversion to the device rate
//! - `session`: One cpal output stream per sound, owned by its own thread
//! - `backend`: `CpalBackend`, the `AudioBackend` tying the above together
//!
//! Clips are short, so each one is decoded completely before playback
//! starts. The completion fires from the audio callback once the last
//! sample has been written.

pub mod backend;
pub mod decode;
mod error;
pub mod resample;
pub mod session;

pub use backend::CpalBackend;
pub use decode::{decode, DecodedAudio};
pub use error::{AudioError, Result};
pub use session::CpalSession;
