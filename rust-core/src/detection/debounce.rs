//! Run-length debounce turning per-block detections into key presses

use super::classifier::Detection;

/// Debounce state machine
///
/// A symbol is accepted once it has been seen, with confidence above
/// `min_confidence`, on `threshold` consecutive blocks after the block that
/// started the run. Each run emits at most once.
#[derive(Debug, Clone)]
pub struct Debounce {
    last_symbol: Option<usize>,
    run_length: usize,
    threshold: usize,
    min_confidence: f64,
}

impl Debounce {
    pub fn new(threshold: usize, min_confidence: f64) -> Self {
        Self {
            last_symbol: None,
            run_length: 0,
            threshold,
            min_confidence,
        }
    }

    /// Advance by one block; returns the symbol when its run first reaches the threshold
    pub fn observe(&mut self, detection: &Detection) -> Option<usize> {
        if self.last_symbol == Some(detection.symbol) && detection.confidence > self.min_confidence {
            self.run_length += 1;
            if self.run_length == self.threshold {
                return Some(detection.symbol);
            }
        } else {
            self.last_symbol = Some(detection.symbol);
            self.run_length = 0;
        }
        None
    }

    pub fn last_symbol(&self) -> Option<usize> {
        self.last_symbol
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    pub fn reset(&mut self) {
        self.last_symbol = None;
        self.run_length = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(symbol: usize, confidence: f64) -> Detection {
        Detection {
            symbol,
            row: symbol / 4,
            column: symbol % 4,
            confidence,
        }
    }

    #[test]
    fn test_emits_once_per_run() {
        let mut debounce = Debounce::new(3, 0.0);

        // First block only starts the run
        assert_eq!(debounce.observe(&det(5, 1.0)), None);
        assert_eq!(debounce.observe(&det(5, 1.0)), None);
        assert_eq!(debounce.observe(&det(5, 1.0)), None);
        assert_eq!(debounce.observe(&det(5, 1.0)), Some(5));

        for _ in 0..10 {
            assert_eq!(debounce.observe(&det(5, 1.0)), None);
        }
        assert_eq!(debounce.run_length(), 13);
    }

    #[test]
    fn test_zero_confidence_breaks_run() {
        let mut debounce = Debounce::new(2, 0.0);

        debounce.observe(&det(0, 1.0));
        debounce.observe(&det(0, 1.0));
        assert_eq!(debounce.observe(&det(0, 0.0)), None);
        assert_eq!(debounce.run_length(), 0);
        assert_eq!(debounce.last_symbol(), Some(0));

        // Same symbol after the break counts from the silent block
        assert_eq!(debounce.observe(&det(0, 1.0)), None);
        assert_eq!(debounce.observe(&det(0, 1.0)), Some(0));
    }

    #[test]
    fn test_symbol_change_restarts() {
        let mut debounce = Debounce::new(2, 0.0);

        debounce.observe(&det(1, 1.0));
        debounce.observe(&det(1, 1.0));
        assert_eq!(debounce.observe(&det(2, 1.0)), None);
        assert_eq!(debounce.last_symbol(), Some(2));
        assert_eq!(debounce.run_length(), 0);
    }

    #[test]
    fn test_min_confidence_gate() {
        let mut debounce = Debounce::new(1, 0.5);

        debounce.observe(&det(3, 0.4));
        assert_eq!(debounce.observe(&det(3, 0.4)), None);
        assert_eq!(debounce.observe(&det(3, 0.6)), Some(3));
    }
}
