//! The emotion lexicon.
//!
//! A fixed, ordered table mapping each emotion to the keywords that trigger it
//! and the insight text shown alongside it. Scan order is the table order, so
//! an earlier entry always wins over a later one when both could match.
//!
//! Matching is a plain case-insensitive substring test. "hard" inside
//! "hardware" matches Frustrated; that is existing behavior and is kept.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// A single lexicon record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionEntry {
    /// Emotion label, unique across the lexicon
    pub emotion: &'static str,

    /// Lower-case keywords, scanned in order
    pub keywords: &'static [&'static str],

    /// Supportive text returned when this entry matches
    pub insights: &'static str,
}

/// The lexicon, in scan order.
pub static LEXICON: [EmotionEntry; 6] = [
    EmotionEntry {
        emotion: "Anxious",
        keywords: &["nervous", "worried", "scared", "afraid", "interview", "test", "exam"],
        insights: "It's natural to feel anxious about new experiences. Consider deep breathing exercises or positive visualization.",
    },
    EmotionEntry {
        emotion: "Excited",
        keywords: &["excited", "happy", "thrilled", "amazing", "great", "wonderful", "love"],
        insights: "Your excitement shows positive anticipation! Channel this energy into productive preparation.",
    },
    EmotionEntry {
        emotion: "Frustrated",
        keywords: &["frustrated", "angry", "annoyed", "difficult", "hard", "struggle"],
        insights: "Frustration often indicates you care deeply about the outcome. Take breaks and approach challenges step by step.",
    },
    EmotionEntry {
        emotion: "Sad",
        keywords: &["sad", "down", "depressed", "lonely", "hurt", "disappointed"],
        insights: "It's okay to feel sad sometimes. Consider reaching out to friends or engaging in activities you enjoy.",
    },
    EmotionEntry {
        emotion: "Calm",
        keywords: &["calm", "peaceful", "relaxed", "content", "serene", "balanced"],
        insights: "Your sense of calm is valuable. This balanced state can help you make clearer decisions.",
    },
    EmotionEntry {
        emotion: "Confused",
        keywords: &["confused", "unsure", "don't know", "uncertain", "mixed"],
        insights: "Confusion is often the first step toward clarity. Consider breaking down complex situations into smaller parts.",
    },
];

/// Fallback labels used when no keyword matches.
pub static DEFAULT_POOL: [&str; 3] = ["Happy", "Calm", "Thoughtful"];

/// Insight text shared by every fallback result.
pub const DEFAULT_INSIGHTS: &str =
    "Your reflection shows self-awareness, which is a positive step toward emotional understanding.";

lazy_static! {
    /// Lower-cased emotion name to lexicon entry.
    static ref EMOTION_INDEX: HashMap<String, &'static EmotionEntry> = LEXICON
        .iter()
        .map(|entry| (entry.emotion.to_lowercase(), entry))
        .collect();
}

/// A keyword hit: the entry it belongs to and the keyword that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub entry: &'static EmotionEntry,
    pub keyword: &'static str,
}

/// Find the first keyword, in lexicon order, contained in `text`.
///
/// Entries are scanned in table order and each entry's keywords in their
/// listed order. The first hit wins regardless of where it appears in the
/// text or how many other keywords also match.
///
/// # Examples
///
/// ```
/// use moodlens_core::lexicon::find_first_match;
///
/// let hit = find_first_match("So EXCITED but also nervous").unwrap();
/// assert_eq!(hit.entry.emotion, "Anxious");
/// assert_eq!(hit.keyword, "nervous");
/// ```
pub fn find_first_match(text: &str) -> Option<KeywordMatch> {
    let text_lower = text.to_lowercase();

    LEXICON.iter().find_map(|entry| {
        entry
            .keywords
            .iter()
            .find(|kw| text_lower.contains(**kw))
            .map(|kw| KeywordMatch { entry, keyword: *kw })
    })
}

/// Look up an entry by emotion name, ignoring case.
pub fn entry(emotion: &str) -> Option<&'static EmotionEntry> {
    EMOTION_INDEX.get(&emotion.trim().to_lowercase()).copied()
}

/// Emotion names in lexicon order.
pub fn emotions() -> impl Iterator<Item = &'static str> {
    LEXICON.iter().map(|entry| entry.emotion)
}
