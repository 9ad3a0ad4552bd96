//! Python bindings for the streaming DTMF decoder

use pyo3::prelude::*;
use numpy::PyReadonlyArray1;
use crate::detection::{self, DecoderConfig, Keypad, StreamingDecoder};
use super::window_bindings::PyWindowType;

fn as_samples<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array.as_slice().map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("samples must be contiguous: {}", e))
    })
}

/// Streaming DTMF decoder exposed to Python
#[pyclass(name = "DtmfDecoder", unsendable)]
pub struct PyDtmfDecoder {
    decoder: StreamingDecoder,
}

#[pymethods]
impl PyDtmfDecoder {
    /// Create a new decoder
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     wiggle_room: Blocks a symbol must repeat before it is emitted (default: 7)
    ///     block_size: Samples per block (default: 205 scaled to sample_rate)
    ///     hop_size: New samples per block (default: block_size / 4)
    ///     window_type: Window applied to each block (default: Hamming)
    ///     min_confidence: Confidence a block must exceed to extend a run (default: 0.0)
    #[new]
    #[pyo3(signature = (sample_rate, wiggle_room=7, block_size=None, hop_size=None, window_type=PyWindowType::Hamming, min_confidence=0.0))]
    fn new(
        sample_rate: f64,
        wiggle_room: usize,
        block_size: Option<usize>,
        hop_size: Option<usize>,
        window_type: PyWindowType,
        min_confidence: f64,
    ) -> PyResult<Self> {
        let mut config = DecoderConfig::for_sample_rate(sample_rate).with_wiggle_room(wiggle_room);

        if let Some(size) = block_size {
            config.block_size = size;
            config.hop_size = size / 4;
        }
        if let Some(hop) = hop_size {
            config.hop_size = hop;
        }
        config.window_type = window_type.into();
        config.min_confidence = min_confidence;

        Ok(Self {
            decoder: StreamingDecoder::new(config, Keypad::standard())?,
        })
    }

    /// Feed normalized samples
    ///
    /// Args:
    ///     samples: Samples in [-1, 1) as numpy array
    ///
    /// Returns:
    ///     Keys emitted by this call as a string
    fn feed(&mut self, samples: PyReadonlyArray1<f64>) -> PyResult<String> {
        let keys = self.decoder.feed(as_samples(&samples)?)?;
        Ok(keys.into_iter().collect())
    }

    /// Feed raw 16-bit little-endian PCM bytes
    fn feed_pcm16(&mut self, data: &[u8]) -> PyResult<String> {
        let keys = self.decoder.feed_pcm16(data)?;
        Ok(keys.into_iter().collect())
    }

    /// All keys decoded so far
    fn output(&self) -> String {
        self.decoder.output().to_string()
    }

    /// End the stream and return every key decoded
    ///
    /// Held samples and any odd PCM byte are discarded. Call `reset` before
    /// decoding an unrelated stream.
    fn finish(&mut self) -> String {
        self.decoder.finish_stream().to_string()
    }

    /// Number of blocks analyzed so far
    fn blocks_processed(&self) -> usize {
        self.decoder.blocks_processed()
    }

    /// Reset buffer, debounce state and output
    fn reset(&mut self) {
        self.decoder.reset();
    }
}

/// Decode a complete signal
///
/// Args:
///     samples: Normalized samples as numpy array
///     sample_rate: Sample rate in Hz
///     wiggle_room: Blocks a symbol must repeat before it is emitted (default: 7)
///
/// Returns:
///     Decoded keys as a string
#[pyfunction]
#[pyo3(signature = (samples, sample_rate, wiggle_room=7))]
pub fn decode(samples: PyReadonlyArray1<f64>, sample_rate: f64, wiggle_room: usize) -> PyResult<String> {
    Ok(detection::decode(as_samples(&samples)?, sample_rate, wiggle_room)?)
}

/// Decode a 16-bit mono PCM WAV file held in memory
#[pyfunction]
#[pyo3(signature = (data, wiggle_room=7))]
pub fn decode_wav(data: &[u8], wiggle_room: usize) -> PyResult<String> {
    Ok(detection::decode_wav(data, wiggle_room)?)
}
