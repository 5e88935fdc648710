//! Property tests for the student record, root solver and noise classifier.
//!
//! Reproduce: `PROPTEST_SEED=<seed> cargo test --test property_tests`

use chrono::NaiveDate;
use classroom_exercises::prelude::*;
use proptest::prelude::*;

fn birth_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2020, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ═══════════════════════════════════════════════════════════════
// Student: every in-range score constructs, every out-of-range one fails
// ═══════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn test_student_in_range_score_constructs(
        id in any::<u32>(),
        score in 0.0f64..=4.0,
        dob in birth_date(),
    ) {
        let s = Student::new(id, "First", "Last", score, dob).unwrap();
        prop_assert!((Student::MIN_SCORE..=Student::MAX_SCORE).contains(&s.score()));
        prop_assert_eq!(s.score(), score);
    }

    #[test]
    fn test_student_out_of_range_score_fails(
        score in prop_oneof![-1.0e6f64..-1.0e-9, 4.000_000_001f64..1.0e6],
        dob in birth_date(),
    ) {
        let result = Student::new(1, "First", "Last", score, dob);
        prop_assert_eq!(result, Err(RecordError::ScoreOutOfRange { score }));
    }

    #[test]
    fn test_student_with_score_preserves_identity(
        id in any::<u32>(),
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
        score in 0.0f64..=4.0,
        new_score in 0.0f64..=4.0,
        dob in birth_date(),
    ) {
        let s = Student::new(id, first.clone(), last.clone(), score, dob).unwrap();
        let t = s.with_score(new_score).unwrap();

        prop_assert_eq!(t.id(), id);
        prop_assert_eq!(t.first_name(), first.as_str());
        prop_assert_eq!(t.last_name(), last.as_str());
        prop_assert_eq!(t.birth_date(), dob);
        prop_assert_eq!(t.score(), new_score);
        prop_assert_eq!(s.score(), score);
        prop_assert_eq!(s.clone(), s);
    }

    #[test]
    fn test_student_display_is_deterministic(
        id in any::<u32>(),
        score in 0.0f64..=4.0,
        dob in birth_date(),
    ) {
        let s = Student::new(id, "Chris", "Bourke", score, dob).unwrap();
        let text = s.to_string();

        prop_assert_eq!(&text, &s.to_string());
        let expected_prefix = format!("Bourke, Chris ({:03}), GPA = ", id);
        prop_assert!(text.starts_with(&expected_prefix));
    }
}

// ═══════════════════════════════════════════════════════════════
// Root solver: factored quadratics recover their roots exactly
// ═══════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn test_roots_recovered_from_factored_form(
        r1 in -100i32..100,
        r2 in -100i32..100,
        k in 1i32..10,
    ) {
        // k(x - r1)(x - r2) = kx² - k(r1 + r2)x + k·r1·r2
        let a = f64::from(k);
        let b = -f64::from(k * (r1 + r2));
        let c = f64::from(k * r1 * r2);

        let hi = f64::from(r1.max(r2));
        let lo = f64::from(r1.min(r2));

        let first = root_one(a, b, c).unwrap();
        prop_assert!((first - hi).abs() < 1e-9, "root_one {} != {}", first, hi);
        prop_assert!((root_two(a, b, c) - lo).abs() < 1e-9);
        prop_assert_eq!(roots(a, b, c), Ok((first, root_two(a, b, c))));
    }

    #[test]
    fn test_negative_discriminant_is_complex(
        a in 1i32..10,
        b in -10i32..10,
        extra in 1i32..100,
    ) {
        // c > b² / 4a guarantees b² - 4ac < 0
        let c = (b * b) / (4 * a) + extra;
        let result = root_one(f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(result, Err(RootError::ComplexRoots));
    }

    #[test]
    fn test_zero_leading_coefficient_always_rejected(
        b in -1.0e6f64..1.0e6,
        c in -1.0e6f64..1.0e6,
    ) {
        prop_assert_eq!(root_one(0.0, b, c), Err(RootError::DivisionByZero));
        prop_assert_eq!(roots(0.0, b, c), Err(RootError::DivisionByZero));
    }
}

// ═══════════════════════════════════════════════════════════════
// Noise classifier: louder never maps to a quieter band
// ═══════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn test_noise_classification_is_monotone(
        x in -1000i64..1000,
        y in -1000i64..1000,
    ) {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        prop_assert!(NoiseLevel::classify(lo) <= NoiseLevel::classify(hi));
    }

    #[test]
    fn test_negative_readings_are_invalid(decibels in i64::MIN..0) {
        prop_assert_eq!(NoiseLevel::classify(decibels), NoiseLevel::Invalid);
    }
}
