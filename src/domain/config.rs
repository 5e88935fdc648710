// ============================================================================
// Noise Scale Configuration
// Band boundaries for decibel classification
// ============================================================================

use super::noise::NoiseLevel;

/// Inclusive upper bounds (in decibels) of the bounded noise bands.
///
/// `upper_bounds[i]` belongs to `NoiseLevel::BOUNDED[i]`. Readings below zero
/// are `Invalid`; readings above the last bound exceed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseScale {
    pub upper_bounds: [i64; 6],
}

impl NoiseScale {
    /// Create a scale from explicit bounds, quietest band first
    pub const fn new(upper_bounds: [i64; 6]) -> Self {
        Self { upper_bounds }
    }

    /// Standard hearing-safety bands
    /// - Quiet: 0..=60
    /// - Conversational: ..=70
    /// - Loud: ..=90
    /// - Very Loud: ..=110
    /// - Dangerous: ..=129
    /// - Very Dangerous: ..=194
    pub const fn standard() -> Self {
        Self::new([60, 70, 90, 110, 129, 194])
    }

    /// Builder method: override the upper bound of one band.
    ///
    /// `Invalid` and `ExceedsParameters` have no bound and are ignored.
    pub fn with_upper_bound(mut self, level: NoiseLevel, bound: i64) -> Self {
        if let Some(idx) = NoiseLevel::BOUNDED.iter().position(|l| *l == level) {
            self.upper_bounds[idx] = bound;
        }
        self
    }

    /// Upper bound of a band, if it has one
    pub fn upper_bound(&self, level: NoiseLevel) -> Option<i64> {
        NoiseLevel::BOUNDED
            .iter()
            .position(|l| *l == level)
            .map(|idx| self.upper_bounds[idx])
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.upper_bounds[0] < 0 {
            return Err("Quiet upper bound cannot be negative".to_string());
        }

        for (pair, levels) in self
            .upper_bounds
            .windows(2)
            .zip(NoiseLevel::BOUNDED.windows(2))
        {
            if pair[1] <= pair[0] {
                return Err(format!(
                    "{} upper bound ({}) must exceed {} upper bound ({})",
                    levels[1], pair[1], levels[0], pair[0]
                ));
            }
        }

        Ok(())
    }

    /// Classify a reading by ordered range checks.
    ///
    /// Assumes a validated scale; with unsorted bounds the first matching
    /// band wins.
    pub fn classify(&self, decibels: i64) -> NoiseLevel {
        if decibels < 0 {
            return NoiseLevel::Invalid;
        }

        self.upper_bounds
            .iter()
            .zip(NoiseLevel::BOUNDED)
            .find(|(bound, _)| decibels <= **bound)
            .map(|(_, level)| level)
            .unwrap_or(NoiseLevel::ExceedsParameters)
    }
}

impl Default for NoiseScale {
    fn default() -> Self {
        Self::standard()
    }
}
