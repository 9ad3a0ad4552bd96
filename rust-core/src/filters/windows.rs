//! Window functions applied to each analysis block before Goertzel filtering
//!
//! Every supported family is a generalized cosine-sum window:
//! w[n] = a0 - a1*cos(2πn/(N-1)) + a2*cos(4πn/(N-1)) - a3*cos(6πn/(N-1))

use crate::error::{DtmfError, Result};
use std::f64::consts::PI;

/// Maximum number of cosine terms in a cosine-sum window
pub const MAX_COSINE_TERMS: usize = 4;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Hamming window: w[n] = 0.53836 - 0.46164*cos(2πn/(N-1))
    /// Default for DTMF detection, sidelobes ~-43 dB
    #[default]
    Hamming,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(N-1))
    Hann,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(N-1)) + 0.08*cos(4πn/(N-1))
    Blackman,

    /// 4-term Blackman-Harris window, sidelobes ~-92 dB
    BlackmanHarris,

    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Cosine-sum coefficients a[0..] for this family
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            WindowType::Hamming => &[0.53836, 0.46164],
            WindowType::Hann => &[0.5, 0.5],
            WindowType::Blackman => &[0.42, 0.5, 0.08],
            WindowType::BlackmanHarris => &[0.35875, 0.48829, 0.14128, 0.01168],
            WindowType::Rectangular => &[1.0],
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N), at least 2
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Result<Vec<f64>> {
    cosine_sum_window(window_type.coefficients(), length)
}

/// Generate a cosine-sum window from 1 to 4 coefficients
///
/// Term i contributes (-1)^i * a[i] * cos(2πin/(N-1)).
pub fn cosine_sum_window(coefficients: &[f64], length: usize) -> Result<Vec<f64>> {
    if coefficients.is_empty() || coefficients.len() > MAX_COSINE_TERMS {
        return Err(DtmfError::InvalidConfiguration(format!(
            "window needs 1 to {} cosine terms, got {}",
            MAX_COSINE_TERMS,
            coefficients.len()
        )));
    }
    if length < 2 {
        return Err(DtmfError::InvalidConfiguration(format!(
            "window length must be at least 2, got {}",
            length
        )));
    }

    let denom = (length - 1) as f64;
    let window = (0..length)
        .map(|n| {
            let base = 2.0 * PI * n as f64 / denom;
            coefficients
                .iter()
                .enumerate()
                .fold(0.0, |acc, (i, &a)| {
                    let term = a * (base * i as f64).cos();
                    if i % 2 == 0 {
                        acc + term
                    } else {
                        acc - term
                    }
                })
        })
        .collect();

    Ok(window)
}

/// Multiply `signal` by `window` into `output`
///
/// All three slices must have the same length.
pub fn apply_window(signal: &[f64], window: &[f64], output: &mut [f64]) -> Result<()> {
    if signal.len() != window.len() || output.len() != window.len() {
        return Err(DtmfError::InvalidInput(format!(
            "window length {} does not match block of {} samples",
            window.len(),
            signal.len()
        )));
    }

    for ((out, &s), &w) in output.iter_mut().zip(signal).zip(window) {
        *out = s * w;
    }
    Ok(())
}
