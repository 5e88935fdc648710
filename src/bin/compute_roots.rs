//! Roots of a quadratic equation given its three coefficients.
//!
//! ```bash
//! compute-roots 1 -3 2
//! # Roots of 1.000000 x^2 + -3.000000 x + 2.000000 are 2.000000 and 1.000000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use classroom_exercises::demo::roots::{describe, rejection_message};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "compute-roots")]
#[command(version, about = "Compute the real roots of a·x² + b·x + c", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Leading coefficient
    a: f64,

    /// Linear coefficient
    b: f64,

    /// Constant term
    c: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match describe(cli.a, cli.b, cli.c) {
        Ok(line) => {
            println!("{}", line);
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            tracing::warn!(a = cli.a, b = cli.b, c = cli.c, error = %err, "rejected coefficients");
            println!("{}", rejection_message(&err));
            Ok(ExitCode::FAILURE)
        },
    }
}
