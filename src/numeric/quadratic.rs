// ============================================================================
// Quadratic Root Solver
// Real roots of a·x² + b·x + c using double-precision arithmetic
// ============================================================================

use super::errors::{Coefficient, RootError, RootResult};

/// The discriminant `b² - 4ac`. Its sign decides whether the roots are real.
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Square root of the discriminant.
///
/// NaN when the discriminant is negative.
#[inline]
pub fn radical(a: f64, b: f64, c: f64) -> f64 {
    discriminant(a, b, c).sqrt()
}

/// First root, `(-b + √(b² - 4ac)) / 2a`.
///
/// # Errors
/// - `ComplexRoots` if the discriminant is negative
/// - `DivisionByZero` if `a == 0`
///
/// # Example
/// ```
/// use classroom_exercises::numeric::root_one;
///
/// assert_eq!(root_one(1.0, -3.0, 2.0).unwrap(), 2.0);
/// ```
pub fn root_one(a: f64, b: f64, c: f64) -> RootResult<f64> {
    if discriminant(a, b, c) < 0.0 {
        return Err(RootError::ComplexRoots);
    }
    if a == 0.0 {
        return Err(RootError::DivisionByZero);
    }

    Ok((-b + radical(a, b, c)) / (2.0 * a))
}

/// Second root, `(-b - √(b² - 4ac)) / 2a`.
///
/// Performs no validation. The caller must have validated the coefficients
/// first (for example through [`root_one`]); otherwise the result is NaN
/// for a negative discriminant and infinite or NaN for `a == 0`.
#[inline]
pub fn root_two(a: f64, b: f64, c: f64) -> f64 {
    (-b - radical(a, b, c)) / (2.0 * a)
}

/// Both roots, validated once.
///
/// The zero leading coefficient is checked before the discriminant. The
/// first element is the `+√` root, the second the `-√` root.
pub fn roots(a: f64, b: f64, c: f64) -> RootResult<(f64, f64)> {
    if a == 0.0 {
        return Err(RootError::DivisionByZero);
    }
    if discriminant(a, b, c) < 0.0 {
        return Err(RootError::ComplexRoots);
    }

    let r = radical(a, b, c);
    Ok(((-b + r) / (2.0 * a), (-b - r) / (2.0 * a)))
}

// ============================================================================
// Coefficient Set
// ============================================================================

/// The three coefficients of a quadratic equation, all present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Build from possibly absent inputs.
    ///
    /// # Errors
    /// Returns `MissingCoefficient` naming the first absent coefficient.
    pub fn from_optional(a: Option<f64>, b: Option<f64>, c: Option<f64>) -> RootResult<Self> {
        let a = a.ok_or(RootError::MissingCoefficient(Coefficient::A))?;
        let b = b.ok_or(RootError::MissingCoefficient(Coefficient::B))?;
        let c = c.ok_or(RootError::MissingCoefficient(Coefficient::C))?;
        Ok(Self { a, b, c })
    }

    pub fn discriminant(&self) -> f64 {
        discriminant(self.a, self.b, self.c)
    }

    pub fn root_one(&self) -> RootResult<f64> {
        root_one(self.a, self.b, self.c)
    }

    /// See [`root_two`]: unvalidated.
    pub fn root_two(&self) -> f64 {
        root_two(self.a, self.b, self.c)
    }

    pub fn roots(&self) -> RootResult<(f64, f64)> {
        roots(self.a, self.b, self.c)
    }
}
