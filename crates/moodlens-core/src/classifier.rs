//! Classifiers: text in, emotion out.
//!
//! Every classifier is total. Any string, including the empty string, yields
//! a well-formed result; when nothing in the lexicon matches, the result is a
//! guess from the default pool with a lower confidence band.

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::RngCore;
use regex::Regex;
use std::collections::HashSet;

use crate::confidence::ConfidenceBand;
use crate::lexicon::{self, EmotionEntry, DEFAULT_INSIGHTS, DEFAULT_POOL, LEXICON};
use crate::types::{Classification, ClassificationResult, Strategy};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// Trait implemented by all classifiers.
pub trait Classifier {
    /// The strategy this classifier implements.
    fn strategy(&self) -> Strategy;

    /// Classify `text`, drawing any randomness from `rng`.
    ///
    /// Pass a seeded RNG for reproducible results.
    fn classify_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> Classification;

    /// Classify `text` using the thread-local RNG.
    fn classify(&self, text: &str) -> Classification {
        self.classify_with_rng(text, &mut rand::thread_rng())
    }
}

impl Strategy {
    /// Build the classifier for this strategy.
    pub fn classifier(&self) -> Box<dyn Classifier + Send + Sync> {
        match self {
            Strategy::FirstMatch => Box::new(KeywordClassifier::new()),
            Strategy::Scored => Box::new(ScoredClassifier::new()),
        }
    }
}

/// First-match keyword lookup.
///
/// The first keyword found in lexicon order decides the emotion. Confidence
/// is drawn from [`ConfidenceBand::KEYWORD`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for KeywordClassifier {
    fn strategy(&self) -> Strategy {
        Strategy::FirstMatch
    }

    fn classify_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> Classification {
        match lexicon::find_first_match(text) {
            Some(hit) => {
                tracing::debug!(emotion = hit.entry.emotion, keyword = hit.keyword, "Keyword match");
                Classification {
                    result: entry_result(hit.entry, ConfidenceBand::KEYWORD.sample(rng)),
                    matched_keyword: Some(hit.keyword),
                }
            }
            None => fallback(rng),
        }
    }
}

/// Score-based keyword lookup.
///
/// Each entry scores one point per keyword contained in the text and one
/// more when that keyword is also a whole word of the text. The highest
/// score wins, ties going to the earlier entry. Confidence is
/// `min(0.95, 0.6 + 0.1 * score)` rounded to two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoredClassifier;

impl ScoredClassifier {
    pub const MAX_CONFIDENCE: f64 = 0.95;

    pub fn new() -> Self {
        Self
    }

    /// Score a single entry against lower-cased text and its word set.
    ///
    /// Returns the score and the first keyword that contributed to it.
    fn score_entry(
        entry: &'static EmotionEntry,
        text_lower: &str,
        words: &HashSet<&str>,
    ) -> (u32, Option<&'static str>) {
        let mut score = 0;
        let mut first_hit = None;

        for kw in entry.keywords {
            if text_lower.contains(kw) {
                score += 1;
                if words.contains(kw) {
                    score += 1;
                }
                first_hit.get_or_insert(*kw);
            }
        }

        (score, first_hit)
    }

    fn confidence_for(score: u32) -> f64 {
        let raw = (0.6 + f64::from(score) * 0.1).min(Self::MAX_CONFIDENCE);
        (raw * 100.0).round() / 100.0
    }
}

impl Classifier for ScoredClassifier {
    fn strategy(&self) -> Strategy {
        Strategy::Scored
    }

    fn classify_with_rng(&self, text: &str, rng: &mut dyn RngCore) -> Classification {
        let text_lower = text.to_lowercase();
        let words: HashSet<&str> = WORD_PATTERN
            .find_iter(&text_lower)
            .map(|m| m.as_str())
            .collect();

        let mut best: Option<(u32, &'static EmotionEntry, &'static str)> = None;
        for entry in &LEXICON {
            let (score, hit) = Self::score_entry(entry, &text_lower, &words);
            let Some(keyword) = hit else { continue };
            // Strictly greater keeps the earlier entry on ties
            if best.map_or(true, |(top, _, _)| score > top) {
                best = Some((score, entry, keyword));
            }
        }

        match best {
            Some((score, entry, keyword)) => {
                tracing::debug!(emotion = entry.emotion, score, "Scored match");
                Classification {
                    result: entry_result(entry, Self::confidence_for(score)),
                    matched_keyword: Some(keyword),
                }
            }
            None => fallback(rng),
        }
    }
}

fn entry_result(entry: &EmotionEntry, confidence: f64) -> ClassificationResult {
    ClassificationResult {
        emotion: entry.emotion.to_string(),
        confidence,
        insights: entry.insights.to_string(),
    }
}

/// Guess from the default pool when no keyword matched.
fn fallback(rng: &mut dyn RngCore) -> Classification {
    let emotion = DEFAULT_POOL.choose(rng).copied().unwrap_or(DEFAULT_POOL[0]);
    tracing::debug!(emotion, "No keyword matched, using default pool");

    Classification {
        result: ClassificationResult {
            emotion: emotion.to_string(),
            confidence: ConfidenceBand::FALLBACK.sample(rng),
            insights: DEFAULT_INSIGHTS.to_string(),
        },
        matched_keyword: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_keyword_path_uses_entry_and_keyword_band() {
        let mut rng = seeded();
        let c = KeywordClassifier::new()
            .classify_with_rng("I feel nervous about my interview", &mut rng);

        assert_eq!(c.result.emotion, "Anxious");
        assert_eq!(c.result.insights, LEXICON[0].insights);
        assert_eq!(c.matched_keyword, Some("nervous"));
        assert!(ConfidenceBand::KEYWORD.contains(c.result.confidence));
    }

    #[test]
    fn test_every_keyword_selects_its_entry() {
        // No keyword contains a keyword of an earlier entry, so each one
        // selects its own entry when it appears alone.
        let classifier = KeywordClassifier::new();
        let mut rng = seeded();
        for entry in &LEXICON {
            for kw in entry.keywords {
                let text = format!("... {} ...", kw.to_uppercase());
                let c = classifier.classify_with_rng(&text, &mut rng);
                assert_eq!(c.result.emotion, entry.emotion, "keyword {:?}", kw);
                assert_eq!(c.result.insights, entry.insights);
                assert!(ConfidenceBand::KEYWORD.contains(c.result.confidence));
            }
        }
    }

    #[test]
    fn test_first_match_beats_later_entry() {
        let mut rng = seeded();
        let c = KeywordClassifier::new()
            .classify_with_rng("calm now, but I was angry earlier", &mut rng);
        assert_eq!(c.result.emotion, "Frustrated");
    }

    #[test]
    fn test_fallback_path() {
        let classifier = KeywordClassifier::new();
        let mut rng = seeded();
        for _ in 0..200 {
            let c = classifier.classify_with_rng("xyz", &mut rng);
            assert!(c.is_fallback());
            assert!(DEFAULT_POOL.contains(&c.result.emotion.as_str()));
            assert_eq!(c.result.insights, DEFAULT_INSIGHTS);
            assert!(ConfidenceBand::FALLBACK.contains(c.result.confidence));
        }
    }

    #[test]
    fn test_fallback_reaches_whole_pool() {
        let classifier = KeywordClassifier::new();
        let mut rng = seeded();
        let seen: HashSet<String> = (0..300)
            .map(|_| classifier.classify_with_rng("xyz", &mut rng).result.emotion)
            .collect();
        assert_eq!(seen.len(), DEFAULT_POOL.len());
    }

    #[test]
    fn test_empty_input_is_total() {
        for strategy in [Strategy::FirstMatch, Strategy::Scored] {
            let c = strategy.classifier().classify("");
            assert!(c.is_fallback());
            assert!(!c.result.emotion.is_empty());
            assert!((0.0..=1.0).contains(&c.result.confidence));
        }
    }

    #[test]
    fn test_thread_rng_classify() {
        let c = KeywordClassifier::new().classify("What a wonderful day");
        assert_eq!(c.result.emotion, "Excited");
        assert!(ConfidenceBand::KEYWORD.contains(c.result.confidence));
    }

    #[test]
    fn test_scored_prefers_most_hits() {
        // Anxious scores 2 ("exam"), Sad scores 4 ("sad", "lonely")
        let mut rng = seeded();
        let c = ScoredClassifier::new()
            .classify_with_rng("exam went badly, so sad and lonely", &mut rng);
        assert_eq!(c.result.emotion, "Sad");
        assert!((c.result.confidence - 0.95).abs() < 1e-9);
        assert_eq!(c.matched_keyword, Some("sad"));
    }

    #[test]
    fn test_scored_tie_goes_to_earlier_entry() {
        let mut rng = seeded();
        let c = ScoredClassifier::new().classify_with_rng("lonely yet thrilled", &mut rng);
        assert_eq!(c.result.emotion, "Excited");
        assert!((c.result.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_scored_substring_only_gets_single_point() {
        let mut rng = seeded();
        let c = ScoredClassifier::new().classify_with_rng("new hardware arrived", &mut rng);
        assert_eq!(c.result.emotion, "Frustrated");
        assert!((c.result.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_scored_confidence_is_capped() {
        assert!((ScoredClassifier::confidence_for(1) - 0.7).abs() < 1e-9);
        assert!((ScoredClassifier::confidence_for(3) - 0.9).abs() < 1e-9);
        assert_eq!(ScoredClassifier::confidence_for(10), ScoredClassifier::MAX_CONFIDENCE);
    }

    #[test]
    fn test_scored_fallback_matches_keyword_fallback() {
        let mut rng = seeded();
        let c = ScoredClassifier::new().classify_with_rng("xyz", &mut rng);
        assert!(c.is_fallback());
        assert!(DEFAULT_POOL.contains(&c.result.emotion.as_str()));
        assert!(ConfidenceBand::FALLBACK.contains(c.result.confidence));
    }

    #[test]
    fn test_strategy_builds_matching_classifier() {
        assert_eq!(Strategy::FirstMatch.classifier().strategy(), Strategy::FirstMatch);
        assert_eq!(Strategy::Scored.classifier().strategy(), Strategy::Scored);
    }
}
