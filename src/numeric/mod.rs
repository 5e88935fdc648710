// ============================================================================
// Numeric Module
// Quadratic root solving with explicit error reporting
// ============================================================================
//
// This module provides:
// - root_one / root_two / roots: real roots of a·x² + b·x + c
// - Coefficients: the coefficient triple, with absent-input detection
// - RootError: distinguishable failure kinds for root computations
//
// Design principles:
// - Pure functions over f64, no shared state
// - Validation failures return Result (no panics)
// - root_two is deliberately unvalidated; validate through root_one first

mod errors;
mod quadratic;

pub use errors::{Coefficient, RootError, RootResult};
pub use quadratic::{discriminant, radical, root_one, root_two, roots, Coefficients};
