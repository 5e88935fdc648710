// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::NaiveDate;
use classroom_exercises::prelude::*;

fn main() {
    println!("=== Classroom Exercises ===\n");

    // Student records: construct, copy, copy with a new score
    println!("Student records:");
    let dob = NaiveDate::from_ymd_opt(1978, 7, 9).unwrap();
    let s = Student::new(12345678, "Chris", "Bourke", 3.0, dob).unwrap();
    let t = s.with_score(3.5).unwrap();
    println!("  {}", s);
    println!("  {}", t);
    println!("  born on a {}", s.birth_weekday());

    match s.with_score(4.2) {
        Ok(_) => println!("  unexpected: 4.2 accepted"),
        Err(err) => println!("  rejected: {}", err),
    }

    // Quadratic roots
    println!("\nQuadratic roots:");
    for (a, b, c) in [(1.0, -3.0, 2.0), (1.0, 0.0, 1.0), (0.0, 20.0, 10.0)] {
        match root_one(a, b, c) {
            Ok(r1) => {
                // root_one validated the coefficients
                let r2 = root_two(a, b, c);
                println!("  {}x² + {}x + {}: {} and {}", a, b, c, r1, r2);
            },
            Err(err) => println!("  {}x² + {}x + {}: {}", a, b, c, err),
        }
    }

    // Day labels
    println!("\nDays of the week:");
    for day in DayOfWeek::ALL {
        println!("  {}", day);
    }

    // Decibel bands
    println!("\nDecibel levels:");
    let scale = NoiseScale::standard();
    for db in [-1, 45, 65, 85, 100, 120, 150, 200] {
        println!("  {:>4} dB -> {}", db, scale.classify(db));
    }
}
