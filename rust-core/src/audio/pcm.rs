//! 16-bit little-endian PCM conversion

/// Full-scale divisor for signed 16-bit samples
pub const PCM16_SCALE: f64 = 32768.0;

/// Convert raw 16-bit little-endian PCM to normalized samples in [-1, 1)
///
/// An odd trailing byte cannot form a sample and is dropped.
pub fn pcm16_le_to_f64(bytes: &[u8]) -> Vec<f64> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        log::debug!("Dropping trailing odd byte from PCM data ({} bytes)", bytes.len());
    }

    chunks
        .map(|pair| f64::from(i16::from_le_bytes([pair[0], pair[1]])) / PCM16_SCALE)
        .collect()
}
