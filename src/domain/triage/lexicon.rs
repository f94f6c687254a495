//! Keyword lexicon for risk and problem classification.
//!
//! Classification is case-insensitive substring membership against fixed
//! keyword tables. The tables are configuration data: policy code takes a
//! [`Lexicon`] value and never hard-codes keywords, so a deployment can swap
//! the tables without touching the state machine.

use super::{ProblemType, RiskTier};

/// Default risk keyword table, most severe tier first.
const DEFAULT_RISK_TABLE: &[(RiskTier, &[&str])] = &[
    (
        RiskTier::Severe,
        &[
            "suicide",
            "kill myself",
            "end it all",
            "no point living",
            "better off dead",
        ],
    ),
    (
        RiskTier::High,
        &[
            "hopeless",
            "worthless",
            "hate myself",
            "can't go on",
            "everything is wrong",
        ],
    ),
    (
        RiskTier::Moderate,
        &["depressed", "anxious", "panic", "scared", "overwhelmed", "stressed"],
    ),
    (
        RiskTier::Low,
        &["tired", "worried", "sad", "down", "upset"],
    ),
];

/// Default problem category table. Relationship is checked before job as a
/// deliberate tie-break: relationship wording wins over overlapping job wording.
const DEFAULT_PROBLEM_TABLE: &[(ProblemType, &[&str])] = &[
    (
        ProblemType::Relationship,
        &[
            "breakup",
            "broke up",
            "cheat",
            "cheated",
            "girlfriend",
            "boyfriend",
            "partner",
            "relationship",
            "cheating",
        ],
    ),
    (
        ProblemType::Job,
        &[
            "fired",
            "laid off",
            "lost my job",
            "lost job",
            "betray",
            "boss",
            "coworker",
            "job",
            "workplace",
            "resign",
            "quit",
            "sacked",
        ],
    ),
];

/// Keyword tables for message classification.
///
/// Both classification methods are pure: no side effects and no dependence
/// on session state. Identical input always yields identical output.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Risk tiers with their keyword sets, ordered most severe first.
    risk_tiers: Vec<(RiskTier, Vec<String>)>,
    /// Problem categories with their keyword sets, in tie-break order.
    problem_categories: Vec<(ProblemType, Vec<String>)>,
}

impl Lexicon {
    /// Creates a lexicon from explicit tables.
    ///
    /// `risk_tiers` must be ordered most severe first; classification walks
    /// the table in order and the first matching tier wins.
    pub fn new(
        risk_tiers: Vec<(RiskTier, Vec<String>)>,
        problem_categories: Vec<(ProblemType, Vec<String>)>,
    ) -> Self {
        Self {
            risk_tiers,
            problem_categories,
        }
    }

    /// Maps free text to a risk tier.
    ///
    /// Tiers are checked in fixed priority order severe > high > moderate >
    /// low; the first tier with any case-insensitive substring match wins.
    /// No match yields [`RiskTier::Low`].
    pub fn classify_risk(&self, text: &str) -> RiskTier {
        let lowered = text.to_lowercase();
        for (tier, keywords) in &self.risk_tiers {
            if keywords.iter().any(|kw| lowered.contains(kw.as_str())) {
                return *tier;
            }
        }
        RiskTier::Low
    }

    /// Maps free text to a problem category.
    ///
    /// Categories are checked in table order; first match wins. No match
    /// yields [`ProblemType::Other`].
    pub fn classify_problem(&self, text: &str) -> ProblemType {
        let lowered = text.to_lowercase();
        for (category, keywords) in &self.problem_categories {
            if keywords.iter().any(|kw| lowered.contains(kw.as_str())) {
                return *category;
            }
        }
        ProblemType::Other
    }

}

impl Default for Lexicon {
    fn default() -> Self {
        let to_owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            risk_tiers: DEFAULT_RISK_TABLE
                .iter()
                .map(|(tier, words)| (*tier, to_owned(words)))
                .collect(),
            problem_categories: DEFAULT_PROBLEM_TABLE
                .iter()
                .map(|(category, words)| (*category, to_owned(words)))
                .collect(),
        }
    }
}
