//! Risk tier classification for user messages.
//!
//! Tiers form a strict safety ordering. A session's stored risk level only
//! ever escalates; it never silently downgrades mid-session.

use serde::{Deserialize, Serialize};

/// Coarse safety classification of a message.
///
/// The derived `Ord` follows declaration order, so
/// `Low < Moderate < High < Severe` and `max()` gives the more severe tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Mild distress language, or no risk language at all.
    #[default]
    Low,

    /// Clear distress language (anxiety, panic, overwhelm).
    Moderate,

    /// Strong hopelessness or self-worth collapse.
    High,

    /// Suicidal or self-harm language. Triggers the crisis short-circuit.
    Severe,
}

impl RiskTier {
    /// Display indicator shown to the frontend.
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Low => "\u{1F49A}",      // 💚
            Self::Moderate => "\u{1F49B}", // 💛
            Self::High => "\u{1F9E1}",     // 🧡
            Self::Severe => "\u{1F534}",   // 🔴
        }
    }

    /// Returns true if this tier warrants an extra safety step in action plans.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::Severe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ordering {
        use super::*;

        #[test]
        fn tiers_order_by_severity() {
            assert!(RiskTier::Low < RiskTier::Moderate);
            assert!(RiskTier::Moderate < RiskTier::High);
            assert!(RiskTier::High < RiskTier::Severe);
        }

        #[test]
        fn max_picks_the_more_severe_tier() {
            assert_eq!(RiskTier::Low.max(RiskTier::High), RiskTier::High);
            assert_eq!(RiskTier::Severe.max(RiskTier::Moderate), RiskTier::Severe);
        }

        #[test]
        fn default_tier_is_low() {
            assert_eq!(RiskTier::default(), RiskTier::Low);
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&RiskTier::Moderate).unwrap();
            assert_eq!(json, "\"moderate\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let tier: RiskTier = serde_json::from_str("\"severe\"").unwrap();
            assert_eq!(tier, RiskTier::Severe);
        }
    }

    mod indicators {
        use super::*;

        #[test]
        fn each_tier_has_a_distinct_indicator() {
            let tiers = [
                RiskTier::Low,
                RiskTier::Moderate,
                RiskTier::High,
                RiskTier::Severe,
            ];
            let indicators: Vec<_> = tiers.iter().map(|t| t.indicator()).collect();
            for (i, a) in indicators.iter().enumerate() {
                for b in indicators.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }

        #[test]
        fn severe_indicator_is_red() {
            assert_eq!(RiskTier::Severe.indicator(), "🔴");
        }
    }

    mod elevation {
        use super::*;

        #[test]
        fn high_and_severe_are_elevated() {
            assert!(RiskTier::High.is_elevated());
            assert!(RiskTier::Severe.is_elevated());
        }

        #[test]
        fn low_and_moderate_are_not_elevated() {
            assert!(!RiskTier::Low.is_elevated());
            assert!(!RiskTier::Moderate.is_elevated());
        }
    }
}
