use crate::faq::FaqEntry;
use crate::types::reply::ScoreDetails;

pub const KEYWORD_WEIGHT: f64 = 1.0;
pub const QUESTION_WORD_WEIGHT: f64 = 0.5;
/// Question words must be longer than this (in chars) to count.
pub const MIN_QUESTION_WORD_CHARS: usize = 2;

/// A normalized inbound message.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace
#[derive(Debug, Clone)]
pub struct Utterance {
    pub raw: String,
    pub lowered: String,
    pub words: Vec<String>,
}

impl Utterance {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        let words = lowered.split_whitespace().map(|s| s.to_string()).collect();

        Self { raw, lowered, words }
    }
}

pub trait Scorer {
    fn score(&self, entry: &FaqEntry, utterance: &Utterance) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f64 {
        details.relevance + details.priority_bonus
    }
}

/// v0: keyword substring hits plus question-word overlap, nudged by priority.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordOverlapScorer;

impl Scorer for KeywordOverlapScorer {
    fn score(&self, entry: &FaqEntry, utterance: &Utterance) -> ScoreDetails {
        // Substring containment, not token match: CJK messages have no spaces.
        let keyword_hits: Vec<String> = entry
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty() && utterance.lowered.contains(k.as_str()))
            .collect();

        let question_lower = entry.question.to_lowercase();
        let question_overlap: Vec<String> = question_lower
            .split_whitespace()
            .filter(|w| w.chars().count() > MIN_QUESTION_WORD_CHARS)
            .filter(|w| utterance.words.iter().any(|m| m == w))
            .map(|w| w.to_string())
            .collect();

        let relevance = keyword_hits.len() as f64 * KEYWORD_WEIGHT
            + question_overlap.len() as f64 * QUESTION_WORD_WEIGHT;
        let priority_bonus = 1.0 / f64::from(entry.effective_priority());

        ScoreDetails {
            keyword_hits,
            question_overlap,
            relevance,
            priority_bonus,
        }
    }
}
