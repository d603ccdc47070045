//! Synthetic confidence bands.
//!
//! Confidence has no statistical grounding; it exists for display. A keyword
//! hit draws from a higher band than the fallback guess, and that asymmetry
//! must hold for every result.

use rand::Rng;

/// A half-open range `[low, high)` of confidence values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    pub low: f64,
    pub high: f64,
}

impl ConfidenceBand {
    /// Band used when an explicit keyword fired.
    pub const KEYWORD: ConfidenceBand = ConfidenceBand { low: 0.70, high: 1.00 };

    /// Band used when falling back to a default guess.
    pub const FALLBACK: ConfidenceBand = ConfidenceBand { low: 0.60, high: 0.80 };

    /// Draw a value uniformly from the band.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..self.high)
    }

    /// Whether `value` lies inside the band.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}
