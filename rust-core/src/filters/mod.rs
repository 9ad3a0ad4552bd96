//! Window generation and Goertzel filter banks

pub mod windows;
pub mod goertzel;

pub use windows::{WindowType, generate_window, cosine_sum_window, apply_window};
pub use goertzel::{FrequencySet, GoertzelBank};
