//! Streaming DTMF decoder
//!
//! Slides a block-sized buffer over the input `hop` samples at a time,
//! classifies every block and debounces the per-block symbols into keys.

use super::classifier::ToneClassifier;
use super::debounce::Debounce;
use super::keypad::Keypad;
use crate::audio::buffer::SampleBuffer;
use crate::audio::pcm::pcm16_le_to_f64;
use crate::audio::wav::read_pcm16_mono;
use crate::error::{DtmfError, Result};
use crate::filters::windows::WindowType;

/// Block size used at the 8 kHz reference rate
pub const REFERENCE_BLOCK_SIZE: usize = 205;

/// Sample rate the reference block size is defined for
pub const REFERENCE_SAMPLE_RATE: f64 = 8000.0;

/// Consecutive matching blocks required before a key is accepted
pub const DEFAULT_WIGGLE_ROOM: usize = 7;

/// Decoder configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Samples per analysis block
    pub block_size: usize,

    /// New samples per block; overlap is block_size - hop_size
    pub hop_size: usize,

    /// Blocks a symbol must repeat before it is emitted
    pub wiggle_room: usize,

    /// Window applied to each block
    pub window_type: WindowType,

    /// Blocks only extend a run when confidence is strictly above this
    pub min_confidence: f64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::for_sample_rate(REFERENCE_SAMPLE_RATE)
    }
}

impl DecoderConfig {
    /// Scale the 205-sample reference block to `sample_rate`, hop = block / 4
    pub fn for_sample_rate(sample_rate: f64) -> Self {
        let block_size = if sample_rate.is_finite() && sample_rate > 0.0 {
            (REFERENCE_BLOCK_SIZE as f64 * sample_rate / REFERENCE_SAMPLE_RATE) as usize
        } else {
            0
        };

        Self {
            sample_rate,
            block_size,
            hop_size: block_size / 4,
            wiggle_room: DEFAULT_WIGGLE_ROOM,
            window_type: WindowType::Hamming,
            min_confidence: 0.0,
        }
    }

    pub fn with_wiggle_room(mut self, wiggle_room: usize) -> Self {
        self.wiggle_room = wiggle_room;
        self
    }

    /// Check every field; the decoder refuses to start on failure
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(DtmfError::InvalidConfiguration(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.block_size < 2 {
            return Err(DtmfError::InvalidConfiguration(format!(
                "block size must be at least 2, got {}",
                self.block_size
            )));
        }
        if self.hop_size == 0 || self.hop_size > self.block_size {
            return Err(DtmfError::InvalidConfiguration(format!(
                "hop size {} must be in 1..={}",
                self.hop_size, self.block_size
            )));
        }
        if self.wiggle_room == 0 {
            return Err(DtmfError::InvalidConfiguration(
                "wiggle room must be at least 1".to_string(),
            ));
        }
        if self.min_confidence.is_nan() || self.min_confidence < 0.0 {
            return Err(DtmfError::InvalidConfiguration(format!(
                "minimum confidence must be non-negative, got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

/// Incremental DTMF decoder owning its buffer, filter banks and debounce state
pub struct StreamingDecoder {
    config: DecoderConfig,
    keypad: Keypad,
    classifier: ToneClassifier,
    buffer: SampleBuffer,
    debounce: Debounce,
    /// Samples waiting for a full hop
    pending: Vec<f64>,
    /// Low byte of a PCM sample split across `feed_pcm16` calls
    pending_byte: Option<u8>,
    output: String,
    blocks: usize,
}

impl StreamingDecoder {
    pub fn new(config: DecoderConfig, keypad: Keypad) -> Result<Self> {
        config.validate()?;

        let classifier = ToneClassifier::for_keypad(
            &keypad,
            config.sample_rate,
            config.block_size,
            config.window_type,
        )?;
        let buffer = SampleBuffer::new(config.block_size, config.hop_size)?;
        let debounce = Debounce::new(config.wiggle_room, config.min_confidence);

        log::debug!(
            "DTMF decoder: {} Hz, block {}, hop {}, wiggle room {}",
            config.sample_rate,
            config.block_size,
            config.hop_size,
            config.wiggle_room
        );

        Ok(Self {
            pending: Vec::with_capacity(config.hop_size),
            pending_byte: None,
            config,
            keypad,
            classifier,
            buffer,
            debounce,
            output: String::new(),
            blocks: 0,
        })
    }

    /// Standard keypad with the reference block scaled to `sample_rate`
    pub fn standard(sample_rate: f64, wiggle_room: usize) -> Result<Self> {
        let config = DecoderConfig::for_sample_rate(sample_rate).with_wiggle_room(wiggle_room);
        Self::new(config, Keypad::standard())
    }

    /// Feed normalized samples; returns keys emitted during this call
    ///
    /// Samples that do not complete a hop are held until the next call.
    pub fn feed(&mut self, samples: &[f64]) -> Result<Vec<char>> {
        let hop = self.config.hop_size;
        let mut emitted = Vec::new();
        let mut rest = samples;

        if !self.pending.is_empty() {
            let needed = hop - self.pending.len();
            if rest.len() < needed {
                self.pending.extend_from_slice(rest);
                return Ok(emitted);
            }
            let (head, tail) = rest.split_at(needed);
            self.pending.extend_from_slice(head);
            let mut chunk = std::mem::take(&mut self.pending);
            self.step(&chunk, &mut emitted)?;
            chunk.clear();
            self.pending = chunk;
            rest = tail;
        }

        let mut chunks = rest.chunks_exact(hop);
        for chunk in chunks.by_ref() {
            self.step(chunk, &mut emitted)?;
        }
        self.pending.extend_from_slice(chunks.remainder());

        Ok(emitted)
    }

    /// Feed raw 16-bit little-endian PCM bytes
    ///
    /// A trailing odd byte is held and paired with the first byte of the
    /// next call, so chunk boundaries may fall anywhere in the stream.
    pub fn feed_pcm16(&mut self, bytes: &[u8]) -> Result<Vec<char>> {
        let mut rest = bytes;
        let mut samples = Vec::with_capacity(bytes.len() / 2 + 1);

        if let Some(low) = self.pending_byte.take() {
            match rest.split_first() {
                Some((&high, tail)) => {
                    samples.extend(pcm16_le_to_f64(&[low, high]));
                    rest = tail;
                }
                None => {
                    self.pending_byte = Some(low);
                    return Ok(Vec::new());
                }
            }
        }

        let even = rest.len() & !1;
        samples.extend(pcm16_le_to_f64(&rest[..even]));
        self.pending_byte = rest.get(even).copied();

        self.feed(&samples)
    }

    /// One hop: slide, classify, debounce
    fn step(&mut self, hop: &[f64], emitted: &mut Vec<char>) -> Result<()> {
        self.buffer.slide(hop)?;
        let detection = self.classifier.classify(self.buffer.as_slice())?;
        self.blocks += 1;

        if let Some(symbol) = self.debounce.observe(&detection) {
            let key = self.keypad.symbol(symbol).ok_or_else(|| {
                DtmfError::InvalidInput(format!("symbol {} outside keypad", symbol))
            })?;
            log::debug!(
                "Key '{}' at block {} (confidence {:.3e})",
                key,
                self.blocks,
                detection.confidence
            );
            self.output.push(key);
            emitted.push(key);
        }
        Ok(())
    }

    /// Keys decoded so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Blocks analyzed so far
    pub fn blocks_processed(&self) -> usize {
        self.blocks
    }

    /// Samples held back waiting for a full hop
    pub fn pending_samples(&self) -> usize {
        self.pending.len()
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// End of stream: drop any partial hop and return the decoded keys
    pub fn finish(mut self) -> String {
        self.discard_tail();
        self.output
    }

    /// End of stream without consuming the decoder
    ///
    /// Held samples and any odd PCM byte are discarded; the output is kept
    /// until `reset`.
    pub fn finish_stream(&mut self) -> &str {
        self.discard_tail();
        &self.output
    }

    fn discard_tail(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Discarding {} trailing samples (partial hop)", self.pending.len());
            self.pending.clear();
        }
        if self.pending_byte.take().is_some() {
            log::debug!("Dropping trailing odd byte from PCM stream");
        }
        log::info!(
            "DTMF decode finished: {} blocks, {} keys",
            self.blocks,
            self.output.chars().count()
        );
    }

    /// Return to the freshly constructed state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.debounce.reset();
        self.pending.clear();
        self.pending_byte = None;
        self.output.clear();
        self.blocks = 0;
    }
}

/// Decode normalized samples with the standard keypad
pub fn decode(samples: &[f64], sample_rate: f64, wiggle_room: usize) -> Result<String> {
    if samples.is_empty() {
        return Err(DtmfError::EmptyInput);
    }
    let mut decoder = StreamingDecoder::standard(sample_rate, wiggle_room)?;
    decoder.feed(samples)?;
    Ok(decoder.finish())
}

/// Decode raw 16-bit little-endian mono PCM bytes
pub fn decode_pcm16(bytes: &[u8], sample_rate: f64, wiggle_room: usize) -> Result<String> {
    if bytes.is_empty() {
        return Err(DtmfError::EmptyInput);
    }
    let mut decoder = StreamingDecoder::standard(sample_rate, wiggle_room)?;
    decoder.feed_pcm16(bytes)?;
    Ok(decoder.finish())
}

/// Decode a 16-bit mono PCM WAV file using the sample rate from its header
pub fn decode_wav(bytes: &[u8], wiggle_room: usize) -> Result<String> {
    if bytes.is_empty() {
        return Err(DtmfError::EmptyInput);
    }
    let (info, samples) = read_pcm16_mono(bytes)?;

    log::info!(
        "WAV: {} Hz, {} channel(s), {} bits, {} samples",
        info.sample_rate,
        info.channels,
        info.bits_per_sample,
        samples.len()
    );

    decode(&samples, f64::from(info.sample_rate), wiggle_room)
}
