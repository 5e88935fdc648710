// ============================================================================
// Student Demo
// ============================================================================

use crate::domain::Student;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;

/// Render the student walkthrough.
///
/// Writes the raw id, the formatted record, a verbatim copy, and a copy with
/// the score raised to 3.5, one per line.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let birth_date = NaiveDate::from_ymd_opt(1978, 7, 9).context("invalid birth date")?;
    let s = Student::new(12345678, "Chris", "Bourke", 3.0, birth_date)?;
    tracing::debug!(id = s.id(), "constructed student record");

    writeln!(out, "{}", s.id())?;
    writeln!(out, "{}", s)?;

    let copy = s.clone();
    writeln!(out, "{}", copy)?;

    let t = s.with_score(3.5)?;
    tracing::debug!(id = t.id(), score = t.score(), "copied record with new score");
    writeln!(out, "{}", t)?;

    Ok(())
}
