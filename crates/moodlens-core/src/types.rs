//! Core types for moodlens classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The response returned to callers.
///
/// Serializes to exactly three fields: `emotion`, `confidence`, `insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Guessed emotion label, never empty
    pub emotion: String,

    /// Synthetic certainty in [0, 1]
    pub confidence: f64,

    /// Supportive text for the user
    pub insights: String,
}

/// A classification plus the trace of how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The caller-facing result
    pub result: ClassificationResult,

    /// Keyword that decided the result, `None` on the fallback path
    pub matched_keyword: Option<&'static str>,
}

impl Classification {
    /// Whether the result came from the fallback pool.
    pub fn is_fallback(&self) -> bool {
        self.matched_keyword.is_none()
    }

    pub fn into_result(self) -> ClassificationResult {
        self.result
    }
}

/// How input text is mapped to an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// First keyword in lexicon order wins; confidence is random.
    #[default]
    FirstMatch,

    /// Entry with the most keyword hits wins; confidence follows the score.
    Scored,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstMatch => "first_match",
            Self::Scored => "scored",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
