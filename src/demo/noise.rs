// ============================================================================
// Decibel Classifier Demo
// ============================================================================

use crate::domain::{NoiseLevel, NoiseScale};
use std::io::{self, Write};

/// Classify a reading against `scale` and write the band label.
pub fn run<W: Write>(decibels: i64, scale: &NoiseScale, out: &mut W) -> io::Result<NoiseLevel> {
    let level = scale.classify(decibels);
    tracing::debug!(decibels, ?level, "classified reading");

    writeln!(out, "{}", level)?;
    Ok(level)
}
