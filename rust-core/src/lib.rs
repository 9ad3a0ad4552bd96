//! DTMF Decoder - Goertzel-based keypad tone detection
//! 
//! Sliding-window dual-bank Goertzel analysis with debounce, plus optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod audio;
pub mod filters;
pub mod detection;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DtmfError, WavError, Result};
pub use filters::{WindowType, FrequencySet, GoertzelBank, generate_window};
pub use detection::{
    decode, decode_pcm16, decode_wav, DecoderConfig, Detection, Keypad, StreamingDecoder,
    ToneClassifier,
};
