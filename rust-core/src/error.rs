//! Error types for the tone-detection pipeline

use thiserror::Error;

/// Errors raised while reading a WAV container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WavError {
    #[error("Malformed WAV file: {0}")]
    Malformed(&'static str),

    #[error("WAV read failed: {0}")]
    Io(String),

    #[error("Unsupported WAV file: {0}")]
    Unsupported(String),

    #[error("Unsupported WAV format: {channels} channel(s), {bits_per_sample}-bit {sample_format:?}. Expected 16-bit mono PCM; downmix/convert before decoding.")]
    UnsupportedFormat {
        channels: u16,
        bits_per_sample: u16,
        sample_format: hound::SampleFormat,
    },
}

/// Errors raised by window generation, Goertzel banks, classification and decoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DtmfError {
    /// Bad construction parameters; fix the configuration before retrying
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed block or corrupt data shape for a single call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Audio contains no samples")]
    EmptyInput,

    #[error(transparent)]
    Wav(#[from] WavError),
}

pub type Result<T> = std::result::Result<T, DtmfError>;
