//! WAV container reading on top of `hound`
//!
//! Only 16-bit single-channel integer PCM is decoded; anything else is
//! reported so the caller can downmix or convert first.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec};

use super::pcm::PCM16_SCALE;
use crate::error::WavError;

/// Header fields of a WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
}

impl From<WavSpec> for WavInfo {
    fn from(spec: WavSpec) -> Self {
        Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
        }
    }
}

impl From<hound::Error> for WavError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::FormatError(reason) => WavError::Malformed(reason),
            hound::Error::IoError(io) => WavError::Io(io.to_string()),
            other => WavError::Unsupported(other.to_string()),
        }
    }
}

impl WavInfo {
    /// Reject anything other than 16-bit single-channel integer PCM
    pub fn ensure_pcm16_mono(&self) -> Result<(), WavError> {
        if self.sample_format != SampleFormat::Int
            || self.channels != 1
            || self.bits_per_sample != 16
        {
            return Err(WavError::UnsupportedFormat {
                channels: self.channels,
                bits_per_sample: self.bits_per_sample,
                sample_format: self.sample_format,
            });
        }
        Ok(())
    }
}

/// Decode a 16-bit mono PCM WAV file into normalized samples
///
/// A data chunk that ends before its declared length yields the samples
/// that are present.
pub fn read_pcm16_mono(bytes: &[u8]) -> Result<(WavInfo, Vec<f64>), WavError> {
    let mut reader = WavReader::new(Cursor::new(bytes))?;
    let info = WavInfo::from(reader.spec());
    info.ensure_pcm16_mono()?;

    let declared = reader.len() as usize;
    let mut samples = Vec::with_capacity(declared.min(bytes.len() / 2));
    for sample in reader.samples::<i16>() {
        match sample {
            Ok(value) => samples.push(f64::from(value) / PCM16_SCALE),
            Err(hound::Error::IoError(_)) => {
                log::warn!(
                    "WAV data chunk declares {} samples but only {} are present",
                    declared,
                    samples.len()
                );
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok((info, samples))
}

/// Mono 16-bit integer PCM format
#[cfg(test)]
pub(crate) fn pcm16_mono_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Encode normalized samples as an in-memory WAV file with the given format
#[cfg(test)]
pub(crate) fn wav_bytes(samples: &[f64], spec: WavSpec) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            match (spec.sample_format, spec.bits_per_sample) {
                (SampleFormat::Float, _) => writer.write_sample(s as f32).unwrap(),
                (SampleFormat::Int, 8) => writer.write_sample((s * 127.0).round() as i8).unwrap(),
                (SampleFormat::Int, _) => writer
                    .write_sample((s * PCM16_SCALE).round().clamp(-32768.0, 32767.0) as i16)
                    .unwrap(),
            }
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// Encode normalized samples as a 16-bit mono PCM WAV file
#[cfg(test)]
pub(crate) fn pcm16_mono_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    wav_bytes(samples, pcm16_mono_spec(sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fields() {
        let wav = pcm16_mono_wav(&[0.0, 0.5, -0.5], 8000);
        let (info, _) = read_pcm16_mono(&wav).unwrap();

        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.sample_format, SampleFormat::Int);
        assert!(info.ensure_pcm16_mono().is_ok());
    }

    #[test]
    fn test_read_samples() {
        let wav = pcm16_mono_wav(&[0.0, 0.5, -0.5, -1.0], 44100);
        let (info, samples) = read_pcm16_mono(&wav).unwrap();

        assert_eq!(info.sample_rate, 44100);
        assert_eq!(samples, vec![0.0, 0.5, -0.5, -1.0]);
    }

    #[test]
    fn test_skips_unknown_chunks() {
        let plain = pcm16_mono_wav(&[0.25; 4], 44100);
        let fmt_end = 12 + 8 + u32::from_le_bytes([plain[16], plain[17], plain[18], plain[19]]) as usize;

        // Splice a LIST chunk between "fmt " and "data"
        let mut wav = plain[..fmt_end].to_vec();
        wav.extend_from_slice(b"LIST");
        wav.extend_from_slice(&4u32.to_le_bytes());
        wav.extend_from_slice(b"INFO");
        wav.extend_from_slice(&plain[fmt_end..]);
        let riff_len = (wav.len() - 8) as u32;
        wav[4..8].copy_from_slice(&riff_len.to_le_bytes());

        let (info, samples) = read_pcm16_mono(&wav).unwrap();
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(samples, vec![0.25; 4]);
    }

    #[test]
    fn test_rejects_non_riff() {
        assert!(matches!(
            read_pcm16_mono(b"not a wav file at all"),
            Err(WavError::Malformed(_))
        ));
        assert!(matches!(read_pcm16_mono(b"RIFF"), Err(WavError::Io(_))));
        assert!(read_pcm16_mono(&[]).is_err());
    }

    #[test]
    fn test_truncated_data_keeps_present_samples() {
        let wav = pcm16_mono_wav(&[0.125; 100], 8000);
        let cut = &wav[..wav.len() - 50];

        let (_, samples) = read_pcm16_mono(cut).unwrap();
        assert_eq!(samples.len(), 75);
        assert!(samples.iter().all(|&s| s == 0.125));
    }

    #[test]
    fn test_rejects_stereo() {
        let spec = WavSpec {
            channels: 2,
            ..pcm16_mono_spec(8000)
        };
        let wav = wav_bytes(&[0.0; 4], spec);

        assert_eq!(
            read_pcm16_mono(&wav),
            Err(WavError::UnsupportedFormat {
                channels: 2,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            })
        );
    }

    #[test]
    fn test_rejects_float_and_8_bit() {
        let float = WavSpec {
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
            ..pcm16_mono_spec(8000)
        };
        let wav = wav_bytes(&[0.5; 4], float);
        assert!(matches!(
            read_pcm16_mono(&wav),
            Err(WavError::UnsupportedFormat { sample_format: SampleFormat::Float, .. })
        ));

        let narrow = WavSpec {
            bits_per_sample: 8,
            ..pcm16_mono_spec(8000)
        };
        let wav = wav_bytes(&[0.5; 4], narrow);
        assert!(matches!(
            read_pcm16_mono(&wav),
            Err(WavError::UnsupportedFormat { bits_per_sample: 8, .. })
        ));
    }
}
