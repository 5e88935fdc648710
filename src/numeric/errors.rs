// ============================================================================
// Numeric Errors
// Error types for the quadratic root solver
// ============================================================================

use std::fmt;

/// Names one of the three coefficients of `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    A,
    B,
    C,
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::A => write!(f, "a"),
            Coefficient::B => write!(f, "b"),
            Coefficient::C => write!(f, "c"),
        }
    }
}

/// Errors that can occur while computing the roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootError {
    /// Discriminant is negative, no real roots exist
    ComplexRoots,
    /// Leading coefficient is zero, the equation is not quadratic
    DivisionByZero,
    /// A required coefficient was not supplied
    MissingCoefficient(Coefficient),
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootError::ComplexRoots => write!(f, "complex roots: discriminant is negative"),
            RootError::DivisionByZero => {
                write!(f, "cannot divide by zero: leading coefficient is zero")
            },
            RootError::MissingCoefficient(which) => {
                write!(f, "missing coefficient: {} was not supplied", which)
            },
        }
    }
}

impl std::error::Error for RootError {}

/// Result type alias for root computations
pub type RootResult<T> = Result<T, RootError>;
