//! Sentiment Scorer Port - pure lexical-sentiment oracle.
//!
//! The specific scoring algorithm is a collaborator; the policy only
//! requires a signed valence with 0 = neutral and negative = negative
//! affect.

use crate::domain::triage::Sentiment;

/// Port for polarity/subjectivity scoring.
///
/// Implementations must be pure: identical text yields identical scores,
/// with no side effects and no session dependence.
pub trait SentimentScorer: Send + Sync {
    /// Scores one message.
    fn score(&self, text: &str) -> Sentiment;
}
