//! Keypad layout: low/high frequency groups and the symbol table

use crate::error::{DtmfError, Result};
use crate::filters::FrequencySet;

/// Row frequencies of the standard DTMF keypad (Hz)
pub const DTMF_LOW_FREQUENCIES: [f64; 4] = [697.0, 770.0, 852.0, 941.0];

/// Column frequencies of the standard DTMF keypad (Hz)
pub const DTMF_HIGH_FREQUENCIES: [f64; 4] = [1209.0, 1336.0, 1477.0, 1633.0];

/// Standard keys in row-major order
#[rustfmt::skip]
pub const DTMF_SYMBOLS: [char; 16] = [
    '1', '2', '3', 'A',
    '4', '5', '6', 'B',
    '7', '8', '9', 'C',
    '*', '0', '#', 'D',
];

/// Row/column frequency groups with their row-major symbol table
#[derive(Debug, Clone, PartialEq)]
pub struct Keypad {
    low: FrequencySet,
    high: FrequencySet,
    symbols: Vec<char>,
}

impl Keypad {
    /// Create a keypad
    ///
    /// `symbols` must hold exactly |low| × |high| entries, row-major.
    pub fn new(low: FrequencySet, high: FrequencySet, symbols: Vec<char>) -> Result<Self> {
        let expected = low.len() * high.len();
        if symbols.len() != expected {
            return Err(DtmfError::InvalidConfiguration(format!(
                "keypad with {} rows and {} columns needs {} symbols, got {}",
                low.len(),
                high.len(),
                expected,
                symbols.len()
            )));
        }
        Ok(Self { low, high, symbols })
    }

    /// The 4×4 telephone keypad
    pub fn standard() -> Self {
        Self {
            low: FrequencySet::new_unchecked(DTMF_LOW_FREQUENCIES.to_vec()),
            high: FrequencySet::new_unchecked(DTMF_HIGH_FREQUENCIES.to_vec()),
            symbols: DTMF_SYMBOLS.to_vec(),
        }
    }

    pub fn low(&self) -> &FrequencySet {
        &self.low
    }

    pub fn high(&self) -> &FrequencySet {
        &self.high
    }

    pub fn rows(&self) -> usize {
        self.low.len()
    }

    pub fn columns(&self) -> usize {
        self.high.len()
    }

    /// Symbol index for a (row, column) pair
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns() + column
    }

    /// Key character for a symbol index
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// (low Hz, high Hz) pair for a key character
    pub fn frequencies_of(&self, key: char) -> Option<(f64, f64)> {
        let index = self.symbols.iter().position(|&s| s == key)?;
        let row = index / self.columns();
        let column = index % self.columns();
        Some((self.low.as_slice()[row], self.high.as_slice()[column]))
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.rows(), 4);
        assert_eq!(keypad.columns(), 4);

        assert_eq!(keypad.symbol(keypad.index(0, 0)), Some('1'));
        assert_eq!(keypad.symbol(keypad.index(0, 3)), Some('A'));
        assert_eq!(keypad.symbol(keypad.index(3, 1)), Some('0'));
        assert_eq!(keypad.symbol(keypad.index(3, 2)), Some('#'));
        assert_eq!(keypad.symbol(16), None);

        assert_eq!(keypad.frequencies_of('5'), Some((770.0, 1336.0)));
        assert_eq!(keypad.frequencies_of('D'), Some((941.0, 1633.0)));
        assert_eq!(keypad.frequencies_of('x'), None);
    }

    #[test]
    fn test_custom_layout() {
        let low = FrequencySet::new(vec![500.0, 600.0]).unwrap();
        let high = FrequencySet::new(vec![1000.0, 1100.0, 1200.0]).unwrap();

        let keypad = Keypad::new(low.clone(), high.clone(), "abcdef".chars().collect()).unwrap();
        assert_eq!(keypad.symbol(keypad.index(1, 2)), Some('f'));

        assert!(matches!(
            Keypad::new(low, high, vec!['a'; 5]),
            Err(DtmfError::InvalidConfiguration(_))
        ));
    }
}
