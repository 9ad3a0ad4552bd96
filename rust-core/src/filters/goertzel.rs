//! Goertzel filter bank for narrowband energy estimation
//!
//! Each target frequency is snapped to the nearest DFT bin of the block and
//! tracked with the classic two-tap recurrence
//!
//! ```text
//! q0 = 2cos(ω)·q1 - q2 + x[n]
//! ```
//!
//! which costs one multiply and two adds per frequency per sample.

use crate::error::{DtmfError, Result};
use num_complex::Complex;
use std::f64::consts::PI;

/// Ordered, duplicate-free set of target frequencies in Hz
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySet {
    frequencies: Vec<f64>,
}

impl FrequencySet {
    /// Create a frequency set
    ///
    /// Fails if the set is empty or contains non-positive, non-finite
    /// or repeated frequencies.
    pub fn new(frequencies: Vec<f64>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(DtmfError::InvalidConfiguration(
                "frequency set is empty".to_string(),
            ));
        }
        for (i, &f) in frequencies.iter().enumerate() {
            if !f.is_finite() || f <= 0.0 {
                return Err(DtmfError::InvalidConfiguration(format!(
                    "frequency {} Hz is not a positive finite value",
                    f
                )));
            }
            if frequencies[..i].contains(&f) {
                return Err(DtmfError::InvalidConfiguration(format!(
                    "frequency {} Hz appears twice",
                    f
                )));
            }
        }
        Ok(Self { frequencies })
    }

    /// For compile-time tables already known to be valid
    pub(crate) fn new_unchecked(frequencies: Vec<f64>) -> Self {
        Self { frequencies }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Per-frequency recurrence state
#[derive(Debug, Clone)]
struct GoertzelState {
    /// 2·cos(ω)
    coeff: f64,
    cos: f64,
    sin: f64,
    q1: f64,
    q2: f64,
    /// DFT bin the target frequency was snapped to
    bin: usize,
}

/// Bank of Goertzel filters sharing one sample rate and block size
#[derive(Debug, Clone)]
pub struct GoertzelBank {
    states: Vec<GoertzelState>,
    magnitudes: Vec<f64>,
    sample_rate: f64,
    block_size: usize,
}

impl GoertzelBank {
    /// Create a new bank
    ///
    /// # Arguments
    /// * `frequencies` - Target frequencies
    /// * `sample_rate` - Sample rate in Hz
    /// * `block_size` - Number of samples analyzed per block (N)
    pub fn new(frequencies: &FrequencySet, sample_rate: f64, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(DtmfError::InvalidConfiguration(
                "block size must be positive".to_string(),
            ));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(DtmfError::InvalidConfiguration(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }

        let n = block_size as f64;
        let states = frequencies
            .as_slice()
            .iter()
            .map(|&f| {
                // Nearest bin: k = round(N·f / fs)
                let bin = (n * f / sample_rate).round() as usize;
                let omega = 2.0 * PI * bin as f64 / n;
                let cos = omega.cos();
                GoertzelState {
                    coeff: 2.0 * cos,
                    cos,
                    sin: omega.sin(),
                    q1: 0.0,
                    q2: 0.0,
                    bin,
                }
            })
            .collect();

        Ok(Self {
            states,
            magnitudes: vec![0.0; frequencies.len()],
            sample_rate,
            block_size,
        })
    }

    /// Zero all accumulators; call before feeding a new block
    pub fn reset(&mut self) {
        for state in self.states.iter_mut() {
            state.q1 = 0.0;
            state.q2 = 0.0;
        }
    }

    /// Run the recurrence over `samples` in temporal order
    pub fn feed(&mut self, samples: &[f64]) {
        for &sample in samples {
            for state in self.states.iter_mut() {
                let q0 = state.coeff * state.q1 - state.q2 + sample;
                state.q2 = state.q1;
                state.q1 = q0;
            }
        }
    }

    /// Squared energy at each target frequency: q1² + q2² - q1·q2·coeff
    ///
    /// Only comparable across frequencies computed with the same block and window.
    pub fn magnitude(&mut self) -> &[f64] {
        for (mag, state) in self.magnitudes.iter_mut().zip(&self.states) {
            *mag = state.q1 * state.q1 + state.q2 * state.q2 - state.q1 * state.q2 * state.coeff;
        }
        &self.magnitudes
    }

    /// Complex DFT term at each target bin
    ///
    /// Phase is referenced to the last sample of the block; `norm_sqr()` of
    /// each term equals the corresponding `magnitude()` entry.
    pub fn dft_terms(&self) -> Vec<Complex<f64>> {
        self.states
            .iter()
            .map(|s| Complex::new(s.q1 - s.q2 * s.cos, s.q2 * s.sin))
            .collect()
    }

    /// DFT bin index chosen for each target frequency
    pub fn bins(&self) -> Vec<usize> {
        self.states.iter().map(|s| s.bin).collect()
    }

    /// Center frequency in Hz of the bin each target was snapped to
    pub fn bin_frequencies_hz(&self) -> Vec<f64> {
        self.states
            .iter()
            .map(|s| s.bin as f64 * self.sample_rate / self.block_size as f64)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}
