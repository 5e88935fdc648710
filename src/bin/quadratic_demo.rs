//! Root solver walkthrough with fixed inputs.
//!
//! The leading coefficient is left out on purpose, so the run reports a
//! missing coefficient instead of roots.

use anyhow::{Context, Result};
use clap::Parser;
use classroom_exercises::demo;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const B: f64 = 20.0;
const C: f64 = 10.0;

#[derive(Parser)]
#[command(name = "quadratic-demo")]
#[command(version, about = "Quadratic root solver walkthrough", long_about = None)]
struct Cli {
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

    demo::roots::run(None, Some(B), Some(C), &mut std::io::stdout().lock())
        .context("Failed to write roots")?;

    Ok(())
}
