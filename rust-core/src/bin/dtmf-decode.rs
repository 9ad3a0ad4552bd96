//! Decode DTMF keys from a WAV file or raw 16-bit PCM
//!
//! Run with: cargo run -p dtmf-decoder-core --features cli -- <input.wav>

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dtmf_decoder::detection::decoder::DEFAULT_WIGGLE_ROOM;
use dtmf_decoder::{decode_pcm16, decode_wav};

/// Decode DTMF keypad tones from 16-bit mono PCM audio.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file: WAV, or headerless PCM with --raw
    input: PathBuf,

    /// Blocks a symbol must repeat before it is emitted
    #[arg(short, long, default_value_t = DEFAULT_WIGGLE_ROOM)]
    wiggle_room: usize,

    /// Treat the input as raw 16-bit little-endian mono PCM
    #[arg(long, default_value_t = false, requires = "sample_rate")]
    raw: bool,

    /// Sample rate in Hz for --raw input
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let keys = match (cli.raw, cli.sample_rate) {
        (true, Some(rate)) => decode_pcm16(&bytes, f64::from(rate), cli.wiggle_room),
        _ => {
            if cli.sample_rate.is_some() {
                log::warn!("--sample-rate is ignored for WAV input; the header rate is used");
            }
            decode_wav(&bytes, cli.wiggle_room)
        }
    }
    .with_context(|| format!("decoding {}", cli.input.display()))?;

    println!("Decoded DTMF: {}", keys);
    Ok(())
}
