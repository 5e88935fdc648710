// ============================================================================
// Noise Level Domain Model
// ============================================================================

use super::config::NoiseScale;
use std::fmt;

/// Loudness band of a decibel reading, ordered from quietest to loudest.
///
/// `Invalid` sorts first so that classification stays monotone over all
/// integer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoiseLevel {
    /// Negative reading
    Invalid,
    Quiet,
    Conversational,
    Loud,
    VeryLoud,
    Dangerous,
    VeryDangerous,
    /// Above the highest configured bound
    ExceedsParameters,
}

impl NoiseLevel {
    /// Bands that carry an upper bound in a [`NoiseScale`], quietest first
    pub const BOUNDED: [NoiseLevel; 6] = [
        NoiseLevel::Quiet,
        NoiseLevel::Conversational,
        NoiseLevel::Loud,
        NoiseLevel::VeryLoud,
        NoiseLevel::Dangerous,
        NoiseLevel::VeryDangerous,
    ];

    /// Classify against [`NoiseScale::standard`].
    pub fn classify(decibels: i64) -> Self {
        NoiseScale::standard().classify(decibels)
    }

    pub const fn label(self) -> &'static str {
        match self {
            NoiseLevel::Invalid => "Invalid input",
            NoiseLevel::Quiet => "Quiet",
            NoiseLevel::Conversational => "Conversational",
            NoiseLevel::Loud => "Loud",
            NoiseLevel::VeryLoud => "Very Loud",
            NoiseLevel::Dangerous => "Dangerous",
            NoiseLevel::VeryDangerous => "Very Dangerous",
            NoiseLevel::ExceedsParameters => "Level exceeds parameters",
        }
    }
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
