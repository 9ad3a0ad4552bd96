//! Per-block tone symbol classification
//!
//! Windows one block, runs the low-group and high-group Goertzel banks over
//! it and reduces each bank to its strongest frequency.

use super::keypad::Keypad;
use crate::error::{DtmfError, Result};
use crate::filters::windows::{apply_window, generate_window, WindowType};
use crate::filters::{FrequencySet, GoertzelBank};

/// Result of classifying one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// row × columns + column
    pub symbol: usize,
    pub row: usize,
    pub column: usize,
    /// Weaker of the two axis peaks; zero for silence
    pub confidence: f64,
}

/// Index and value of the largest entry
///
/// Starts from (0, 0.0) and only replaces on strictly greater values, so
/// ties keep the first index and an all-zero vector yields (0, 0.0).
pub fn strongest(values: &[f64]) -> (usize, f64) {
    let mut best = (0, 0.0);
    for (i, &v) in values.iter().enumerate() {
        if v > best.1 {
            best = (i, v);
        }
    }
    best
}

/// Dual-bank DTMF classifier
#[derive(Debug, Clone)]
pub struct ToneClassifier {
    low: GoertzelBank,
    high: GoertzelBank,
    window: Vec<f64>,
    /// Windowed copy of the current block; the caller's samples stay untouched
    scratch: Vec<f64>,
}

impl ToneClassifier {
    /// Create a classifier with a standard window family
    pub fn new(
        low: &FrequencySet,
        high: &FrequencySet,
        sample_rate: f64,
        block_size: usize,
        window_type: WindowType,
    ) -> Result<Self> {
        let window = generate_window(window_type, block_size)?;
        Self::with_window(low, high, sample_rate, window)
    }

    /// Create a classifier for the rows and columns of `keypad`
    pub fn for_keypad(
        keypad: &Keypad,
        sample_rate: f64,
        block_size: usize,
        window_type: WindowType,
    ) -> Result<Self> {
        Self::new(keypad.low(), keypad.high(), sample_rate, block_size, window_type)
    }

    /// Create a classifier from precomputed window coefficients
    ///
    /// Block size is the window length.
    pub fn with_window(
        low: &FrequencySet,
        high: &FrequencySet,
        sample_rate: f64,
        window: Vec<f64>,
    ) -> Result<Self> {
        let block_size = window.len();
        Ok(Self {
            low: GoertzelBank::new(low, sample_rate, block_size)?,
            high: GoertzelBank::new(high, sample_rate, block_size)?,
            scratch: vec![0.0; block_size],
            window,
        })
    }

    /// Classify one block of exactly `block_size` samples
    pub fn classify(&mut self, samples: &[f64]) -> Result<Detection> {
        if samples.len() != self.window.len() {
            return Err(DtmfError::InvalidInput(format!(
                "classifier expects blocks of {} samples, got {}",
                self.window.len(),
                samples.len()
            )));
        }

        apply_window(samples, &self.window, &mut self.scratch)?;

        self.low.reset();
        self.high.reset();
        self.low.feed(&self.scratch);
        self.high.feed(&self.scratch);

        let (row, row_peak) = strongest(self.low.magnitude());
        let (column, column_peak) = strongest(self.high.magnitude());

        Ok(Detection {
            symbol: row * self.high.len() + column,
            row,
            column,
            confidence: row_peak.min(column_peak),
        })
    }

    pub fn block_size(&self) -> usize {
        self.window.len()
    }

    pub fn window(&self) -> &[f64] {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn dual_tone(low_hz: f64, high_hz: f64, sample_rate: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|n| {
                let t = n as f64 / sample_rate;
                0.5 * (2.0 * PI * low_hz * t).sin() + 0.5 * (2.0 * PI * high_hz * t).sin()
            })
            .collect()
    }

    fn standard_classifier() -> ToneClassifier {
        ToneClassifier::for_keypad(&Keypad::standard(), 8000.0, 205, WindowType::Hamming).unwrap()
    }

    #[test]
    fn test_strongest_ties_keep_first() {
        assert_eq!(strongest(&[1.0, 5.0, 5.0, 2.0]), (1, 5.0));
        assert_eq!(strongest(&[3.0, 3.0]), (0, 3.0));
    }

    #[test]
    fn test_strongest_all_zero() {
        assert_eq!(strongest(&[0.0, 0.0, 0.0, 0.0]), (0, 0.0));
        assert_eq!(strongest(&[]), (0, 0.0));
    }

    #[test]
    fn test_silence() {
        let mut classifier = standard_classifier();
        let detection = classifier.classify(&vec![0.0; 205]).unwrap();

        assert_eq!(detection.symbol, 0);
        assert_eq!(detection.confidence, 0.0);
    }

    #[test]
    fn test_every_key() {
        let keypad = Keypad::standard();
        let mut classifier = standard_classifier();

        for row in 0..4 {
            for column in 0..4 {
                let low = keypad.low().as_slice()[row];
                let high = keypad.high().as_slice()[column];
                let block = dual_tone(low, high, 8000.0, 205);

                let detection = classifier.classify(&block).unwrap();
                assert_eq!(detection.row, row);
                assert_eq!(detection.column, column);
                assert_eq!(detection.symbol, keypad.index(row, column));
                assert!(detection.confidence > 0.0);
            }
        }
    }

    #[test]
    fn test_single_tone_has_weak_confidence() {
        let mut classifier = standard_classifier();

        let both = classifier.classify(&dual_tone(770.0, 1336.0, 8000.0, 205)).unwrap();

        let low_only: Vec<f64> = (0..205)
            .map(|n| 0.5 * (2.0 * PI * 770.0 * n as f64 / 8000.0).sin())
            .collect();
        let single = classifier.classify(&low_only).unwrap();

        assert_eq!(single.row, 1);
        assert!(single.confidence < both.confidence / 10.0);
    }

    #[test]
    fn test_input_not_modified() {
        let mut classifier = standard_classifier();
        let block = dual_tone(697.0, 1209.0, 8000.0, 205);
        let copy = block.clone();

        classifier.classify(&block).unwrap();
        assert_eq!(block, copy);
    }

    #[test]
    fn test_wrong_block_length() {
        let mut classifier = standard_classifier();
        assert!(matches!(
            classifier.classify(&[0.0; 204]),
            Err(DtmfError::InvalidInput(_))
        ));
        assert!(classifier.classify(&[0.0; 206]).is_err());
    }

    #[test]
    fn test_invalid_construction() {
        let keypad = Keypad::standard();
        assert!(ToneClassifier::for_keypad(&keypad, 8000.0, 1, WindowType::Hamming).is_err());
        assert!(ToneClassifier::for_keypad(&keypad, 0.0, 205, WindowType::Hamming).is_err());
    }
}
