// ============================================================================
// Student Domain Model
// ============================================================================

use super::errors::{RecordError, RecordResult};
use super::weekday::DayOfWeek;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Immutable student record.
///
/// Fields are private and there are no setters. A changed score means a new
/// record built with [`Student::with_score`]; a verbatim copy is [`Clone`].
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: u32,
    first_name: String,
    last_name: String,
    score: f64,
    birth_date: NaiveDate,
}

impl Student {
    /// Lowest accepted score (inclusive)
    pub const MIN_SCORE: f64 = 0.0;

    /// Highest accepted score (inclusive)
    pub const MAX_SCORE: f64 = 4.0;

    /// Create a record from its full field list.
    ///
    /// # Errors
    /// Returns `ScoreOutOfRange` if `score` is not within
    /// [`MIN_SCORE`](Self::MIN_SCORE)..=[`MAX_SCORE`](Self::MAX_SCORE).
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use classroom_exercises::domain::Student;
    ///
    /// let dob = NaiveDate::from_ymd_opt(1978, 7, 9).unwrap();
    /// let s = Student::new(12345678, "Chris", "Bourke", 3.0, dob).unwrap();
    /// assert_eq!(s.to_string(), "Bourke, Chris (12345678), GPA = 3.00");
    /// ```
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        score: f64,
        birth_date: NaiveDate,
    ) -> RecordResult<Self> {
        let score = Self::validate_score(score)?;

        Ok(Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            score,
            birth_date,
        })
    }

    /// Copy this record with a replacement score.
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    /// Returns `ScoreOutOfRange` under the same rule as [`Student::new`].
    pub fn with_score(&self, score: f64) -> RecordResult<Self> {
        let score = Self::validate_score(score)?;

        Ok(Self {
            score,
            ..self.clone()
        })
    }

    fn validate_score(score: f64) -> RecordResult<f64> {
        if (Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score) {
            Ok(score)
        } else {
            Err(RecordError::ScoreOutOfRange { score })
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Day of the week the student was born on
    pub fn birth_weekday(&self) -> DayOfWeek {
        DayOfWeek::from(self.birth_date.weekday())
    }
}

// Ids shorter than three digits are zero-padded; longer ids print in full.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({:03}), GPA = {:.2}",
            self.last_name, self.first_name, self.id, self.score
        )
    }
}
