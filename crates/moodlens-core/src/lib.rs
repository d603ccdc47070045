//! # moodlens-core
//!
//! Keyword-based emotion classification for free-text reflections.
//!
//! Given a reflection, moodlens answers:
//! - Which emotion does it most plausibly express?
//! - How confident is that guess (for display only)?
//! - What short supportive insight goes with it?
//!
//! ## Key Guarantees
//!
//! 1. **Total**: every string, including `""`, yields a well-formed result
//! 2. **Ordered**: the lexicon is scanned in a fixed order; the first keyword hit wins
//! 3. **Never empty**: with no hit, an emotion is drawn from the default pool
//! 4. **Stateless**: the lexicon is read-only, so calls are safe from any thread
//!
//! Confidence is synthetic. A keyword hit draws from `[0.70, 1.00)`, a
//! fallback guess from `[0.60, 0.80)`.
//!
//! ## Example
//!
//! ```rust
//! use moodlens_core::classify;
//!
//! let result = classify("I feel nervous about my interview");
//! assert_eq!(result.emotion, "Anxious");
//! assert!(result.confidence >= 0.70 && result.confidence < 1.00);
//! ```

pub mod classifier;
pub mod confidence;
pub mod config;
pub mod lexicon;
pub mod request;
pub mod types;

// Re-export main types at crate root
pub use classifier::{Classifier, KeywordClassifier, ScoredClassifier};
pub use confidence::ConfidenceBand;
pub use config::{ClassifierConfig, ConfigError};
pub use lexicon::{EmotionEntry, KeywordMatch, DEFAULT_INSIGHTS, DEFAULT_POOL, LEXICON};
pub use request::{analyze, validate, AnalyzeRequest, ErrorBody, RequestError, MIN_REFLECTION_CHARS};
pub use types::{Classification, ClassificationResult, Strategy};

use rand::RngCore;

/// Classify a reflection with the first-match keyword strategy.
///
/// This is the main entry point. It uses the thread-local RNG for the
/// confidence value; use [`classify_with_rng`] for reproducible results.
pub fn classify(text: &str) -> ClassificationResult {
    KeywordClassifier::new().classify(text).into_result()
}

/// Classify a reflection, drawing randomness from `rng`.
///
/// With a seeded RNG, the same input always produces the same result.
pub fn classify_with_rng<R: RngCore>(text: &str, rng: &mut R) -> ClassificationResult {
    KeywordClassifier::new()
        .classify_with_rng(text, rng)
        .into_result()
}
