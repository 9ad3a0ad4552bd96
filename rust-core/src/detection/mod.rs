//! DTMF symbol classification, debouncing and streaming decode

pub mod keypad;
pub mod classifier;
pub mod debounce;
pub mod decoder;

pub use keypad::{Keypad, DTMF_HIGH_FREQUENCIES, DTMF_LOW_FREQUENCIES, DTMF_SYMBOLS};
pub use classifier::{Detection, ToneClassifier};
pub use debounce::Debounce;
pub use decoder::{decode, decode_pcm16, decode_wav, DecoderConfig, StreamingDecoder};
