//! Lexical sentiment scorer.
//!
//! A small word-list valence scorer implementing the [`SentimentScorer`]
//! port. Polarity is the signed balance of positive and negative word hits
//! over total hits; subjectivity is the share of affect-bearing words in
//! the text. Pure and deterministic.

use crate::domain::triage::Sentiment;
use crate::ports::SentimentScorer;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "better", "happy", "glad", "calm", "okay", "fine", "hopeful", "relieved",
    "grateful", "love", "loved", "proud", "safe", "rested", "improving",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "awful", "terrible", "sad", "worse", "worst", "angry", "hurt", "scared", "anxious",
    "depressed", "hopeless", "worthless", "alone", "lonely", "tired", "exhausted", "betrayed",
    "cheated", "broken", "panic", "overwhelmed", "stressed", "cry", "crying", "hate",
];

/// Word-list valence scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer;

impl LexicalScorer {
    /// Creates the scorer.
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexicalScorer {
    fn score(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Sentiment::neutral();
        }

        let positive = words
            .iter()
            .filter(|w| POSITIVE_WORDS.contains(*w))
            .count() as f64;
        let negative = words
            .iter()
            .filter(|w| NEGATIVE_WORDS.contains(*w))
            .count() as f64;

        let hits = positive + negative;
        if hits == 0.0 {
            return Sentiment::neutral();
        }

        let polarity = (positive - negative) / hits;
        let subjectivity = hits / words.len() as f64;
        Sentiment::new(polarity, subjectivity)
    }
}
