// ============================================================================
// Classroom Exercises Library
// Small, independent teaching exercises with typed errors
// ============================================================================

//! # Classroom Exercises
//!
//! A handful of self-contained exercises, each demonstrating one idea.
//!
//! ## Features
//!
//! - **Immutable student record** with range-checked score and copy-with-replacement
//! - **Quadratic root solver** with distinguishable failure kinds
//! - **Day-of-week labels** from a compile-time table
//! - **Decibel classifier** over a configurable, validated band scale
//!
//! ## Example
//!
//! ```rust
//! use classroom_exercises::prelude::*;
//! use chrono::NaiveDate;
//!
//! let dob = NaiveDate::from_ymd_opt(1978, 7, 9).unwrap();
//! let s = Student::new(12345678, "Chris", "Bourke", 3.0, dob).unwrap();
//! let t = s.with_score(3.5).unwrap();
//! println!("{}", t); // Bourke, Chris (12345678), GPA = 3.50
//!
//! let r1 = root_one(1.0, -3.0, 2.0).unwrap();
//! let r2 = root_two(1.0, -3.0, 2.0); // validated through root_one above
//! assert_eq!((r1, r2), (2.0, 1.0));
//!
//! assert_eq!(NoiseLevel::classify(65).to_string(), "Conversational");
//! ```

pub mod demo;
pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DayOfWeek, NoiseLevel, NoiseScale, RecordError, RecordResult, Student,
    };
    pub use crate::numeric::{
        root_one, root_two, roots, Coefficient, Coefficients, RootError, RootResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use chrono::NaiveDate;

    #[test]
    fn test_end_to_end_student_lifecycle() {
        let dob = NaiveDate::from_ymd_opt(1978, 7, 9).unwrap();
        let s = Student::new(12345678, "Chris", "Bourke", 3.0, dob).unwrap();

        // Raise the score through a copy
        let t = s.with_score(3.5).unwrap();
        assert_eq!(s.to_string(), "Bourke, Chris (12345678), GPA = 3.00");
        assert_eq!(t.to_string(), "Bourke, Chris (12345678), GPA = 3.50");

        // Invalid replacement leaves both records intact
        assert!(matches!(
            t.with_score(-1.0),
            Err(RecordError::ScoreOutOfRange { .. })
        ));
        assert_eq!(t.score(), 3.5);
        assert_eq!(t.birth_weekday().to_string(), "Sunday");
    }

    #[test]
    fn test_end_to_end_root_solving() {
        let coeffs = Coefficients::new(1.0, -3.0, 2.0);
        let r1 = coeffs.root_one().unwrap();
        let r2 = coeffs.root_two();
        assert_eq!((r1, r2), (2.0, 1.0));
        assert_eq!(coeffs.roots(), Ok((r1, r2)));

        assert_eq!(root_one(1.0, 0.0, 1.0), Err(RootError::ComplexRoots));
        assert_eq!(root_one(0.0, 20.0, 10.0), Err(RootError::DivisionByZero));
        assert_eq!(
            Coefficients::from_optional(None, Some(20.0), Some(10.0)),
            Err(RootError::MissingCoefficient(Coefficient::A))
        );
    }

    #[test]
    fn test_end_to_end_classification() {
        let scale = NoiseScale::standard();
        assert!(scale.validate().is_ok());

        let labels: Vec<String> = [-1, 30, 65, 80, 100, 120, 150, 200]
            .into_iter()
            .map(|db| scale.classify(db).to_string())
            .collect();

        assert_eq!(
            labels,
            [
                "Invalid input",
                "Quiet",
                "Conversational",
                "Loud",
                "Very Loud",
                "Dangerous",
                "Very Dangerous",
                "Level exceeds parameters",
            ]
        );
    }
}
