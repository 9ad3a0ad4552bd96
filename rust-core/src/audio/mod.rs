//! Sample buffering, PCM conversion and WAV container reading

pub mod buffer;
pub mod pcm;
pub mod wav;

pub use buffer::SampleBuffer;
pub use pcm::pcm16_le_to_f64;
pub use wav::{read_pcm16_mono, WavInfo};
