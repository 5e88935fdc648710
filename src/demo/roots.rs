// ============================================================================
// Quadratic Roots Demo
// ============================================================================

use crate::numeric::{roots, Coefficients, RootError, RootResult};
use std::io::{self, Write};

/// Solve with possibly absent coefficients and report the outcome.
///
/// Validation goes through `root_one` before the unvalidated `root_two` is
/// called. Writes `roots: r1, r2` on success or `message = <error>` on
/// failure. Returns the error so callers can pick an exit status.
pub fn run<W: Write>(
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    out: &mut W,
) -> io::Result<Option<RootError>> {
    let outcome = Coefficients::from_optional(a, b, c).and_then(|coeffs| {
        let r1 = coeffs.root_one()?;
        Ok((r1, coeffs.root_two()))
    });

    match outcome {
        Ok((r1, r2)) => {
            tracing::debug!(r1, r2, "computed roots");
            writeln!(out, "roots: {:?}, {:?}", r1, r2)?;
            Ok(None)
        },
        Err(err) => {
            tracing::warn!(error = %err, "root computation rejected");
            writeln!(out, "message = {}", err)?;
            Ok(Some(err))
        },
    }
}

/// One-line description of both roots, six decimal places throughout.
pub fn describe(a: f64, b: f64, c: f64) -> RootResult<String> {
    let (r1, r2) = roots(a, b, c)?;
    Ok(format!(
        "Roots of {:.6} x^2 + {:.6} x + {:.6} are {:.6} and {:.6}",
        a, b, c, r1, r2
    ))
}

/// User-facing text for a rejected input.
pub fn rejection_message(err: &RootError) -> String {
    match err {
        RootError::DivisionByZero => "invalid input: a cannot be zero".to_string(),
        RootError::ComplexRoots => "invalid input: complex roots".to_string(),
        RootError::MissingCoefficient(which) => format!("missing coefficient: {}", which),
    }
}
