//! Sentiment value objects.
//!
//! The numeric scoring itself is delegated to a
//! [`SentimentScorer`](crate::ports::SentimentScorer) collaborator; the
//! domain only carries the scored values and their session-history records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::RiskTier;

/// A polarity/subjectivity pair for one message.
///
/// # Invariants
///
/// - `polarity` is clamped to `[-1.0, 1.0]`; 0 is neutral, negative is
///   negative affect.
/// - `subjectivity` is clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Creates a sentiment, clamping both values to their valid ranges.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// A neutral sentiment (polarity 0, subjectivity 0).
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// One entry in a session's append-only sentiment history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// The scored sentiment.
    pub sentiment: Sentiment,
    /// Risk tier classified from the same message.
    pub risk: RiskTier,
    /// When the message was scored.
    pub recorded_at: Timestamp,
}

impl SentimentRecord {
    /// Creates a record stamped with the current time.
    pub fn new(sentiment: Sentiment, risk: RiskTier) -> Self {
        Self {
            sentiment,
            risk,
            recorded_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_polarity_to_valid_range() {
        assert_eq!(Sentiment::new(2.0, 0.5).polarity, 1.0);
        assert_eq!(Sentiment::new(-3.0, 0.5).polarity, -1.0);
        assert_eq!(Sentiment::new(0.4, 0.5).polarity, 0.4);
    }

    #[test]
    fn new_clamps_subjectivity_to_valid_range() {
        assert_eq!(Sentiment::new(0.0, 1.5).subjectivity, 1.0);
        assert_eq!(Sentiment::new(0.0, -0.5).subjectivity, 0.0);
    }

    #[test]
    fn neutral_has_zero_polarity() {
        assert_eq!(Sentiment::neutral().polarity, 0.0);
    }

    #[test]
    fn record_carries_risk_tier() {
        let record = SentimentRecord::new(Sentiment::new(-0.5, 0.8), RiskTier::High);
        assert_eq!(record.risk, RiskTier::High);
        assert_eq!(record.sentiment.polarity, -0.5);
    }
}
