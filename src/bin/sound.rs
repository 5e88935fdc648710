//! Classify a decibel level into a loudness band.
//!
//! ```bash
//! sound 85
//! # Loud
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use classroom_exercises::demo;
use classroom_exercises::domain::NoiseScale;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sound")]
#[command(version, about = "Classify a decibel level", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Decibel level to classify
    decibels: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let scale = NoiseScale::standard();
    demo::noise::run(cli.decibels, &scale, &mut std::io::stdout().lock())
        .context("Failed to write classification")?;

    Ok(())
}
