//! Sliding sample buffer holding the most recent analysis block
//!
//! Each hop discards the oldest `hop` samples and appends `hop` new ones,
//! so consecutive blocks overlap by `block_size - hop` samples.

use crate::error::{DtmfError, Result};

/// Fixed-length sliding window over the sample stream
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    hop: usize,
}

impl SampleBuffer {
    /// Create a zero-filled buffer
    ///
    /// # Arguments
    /// * `block_size` - Buffer length in samples
    /// * `hop` - Samples advanced per slide, 1..=block_size
    pub fn new(block_size: usize, hop: usize) -> Result<Self> {
        if hop == 0 || hop > block_size {
            return Err(DtmfError::InvalidConfiguration(format!(
                "hop size {} must be in 1..={}",
                hop, block_size
            )));
        }

        Ok(Self {
            samples: vec![0.0; block_size],
            hop,
        })
    }

    /// Slide in exactly `hop` new samples
    pub fn slide(&mut self, incoming: &[f64]) -> Result<()> {
        if incoming.len() != self.hop {
            return Err(DtmfError::InvalidInput(format!(
                "expected {} samples per hop, got {}",
                self.hop,
                incoming.len()
            )));
        }

        let keep = self.samples.len() - self.hop;
        self.samples.copy_within(self.hop.., 0);
        self.samples[keep..].copy_from_slice(incoming);
        Ok(())
    }

    /// Current block, oldest sample first
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn hop(&self) -> usize {
        self.hop
    }

    pub fn block_size(&self) -> usize {
        self.samples.len()
    }

    /// Zero the buffer
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
    }
}
