//! Session state for one conversation.
//!
//! One `SessionState` exists per conversation and is owned exclusively by
//! the turn policy; nothing else mutates it. The state itself carries no
//! decision logic beyond the monotonic risk merge and append-only history.
//!
//! # Invariants
//!
//! - `risk_level` reflects the maximum tier ever observed in
//!   `sentiment_history`, never merely the latest.
//! - `sentiment_history` and `conversation_history` are append-only and
//!   survive wrap-up.
//! - `problem_collected` is true iff a problem type has been classified
//!   since the last wrap-up.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, Timestamp};

use super::{ProblemType, RiskTier, Sentiment, SentimentRecord, TurnStage};

/// One completed exchange in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the user said (or a synthetic marker for policy-initiated entries).
    pub user_text: String,
    /// The assistant text recorded for this turn.
    pub assistant_text: String,
    /// Sentiment scored from the user text, absent for synthetic entries.
    pub sentiment: Option<Sentiment>,
    /// Stage the turn was processed under.
    pub stage: TurnStage,
    /// When the turn was recorded.
    pub timestamp: Timestamp,
}

impl ConversationTurn {
    /// Creates a turn stamped with the current time.
    pub fn new(
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
        sentiment: Option<Sentiment>,
        stage: TurnStage,
    ) -> Self {
        Self {
            user_text: user_text.into(),
            assistant_text: assistant_text.into(),
            sentiment,
            stage,
            timestamp: Timestamp::now(),
        }
    }
}

/// The mutable record of one conversation.
///
/// Created once per conversation and kept for the process lifetime of that
/// conversation. Wrap-up is a soft reset: it clears the problem-cycle
/// fields while preserving the histories and the risk ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    problem_type: Option<ProblemType>,
    problem_collected: bool,
    phase_counter: u32,
    message_count: u32,
    risk_level: RiskTier,
    duration_flagged: bool,
    sentiment_history: Vec<SentimentRecord>,
    last_reply_text: Option<String>,
    conversation_history: Vec<ConversationTurn>,
}

impl SessionState {
    /// Creates a fresh session with no collected problem and low risk.
    pub fn new() -> Self {
        Self {
            problem_type: None,
            problem_collected: false,
            phase_counter: 0,
            message_count: 0,
            risk_level: RiskTier::Low,
            duration_flagged: false,
            sentiment_history: Vec::new(),
            last_reply_text: None,
            conversation_history: Vec::new(),
        }
    }

    // ── accessors ──────────────────────────────────────────────────────

    pub fn problem_type(&self) -> Option<ProblemType> {
        self.problem_type
    }

    pub fn problem_collected(&self) -> bool {
        self.problem_collected
    }

    pub fn phase_counter(&self) -> u32 {
        self.phase_counter
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    pub fn risk_level(&self) -> RiskTier {
        self.risk_level
    }

    pub fn duration_flagged(&self) -> bool {
        self.duration_flagged
    }

    pub fn sentiment_history(&self) -> &[SentimentRecord] {
        &self.sentiment_history
    }

    pub fn conversation_history(&self) -> &[ConversationTurn] {
        &self.conversation_history
    }

    pub fn last_reply_text(&self) -> Option<&str> {
        self.last_reply_text.as_deref()
    }

    /// Returns the `n` most recent turns, oldest first.
    pub fn history_window(&self, n: usize) -> &[ConversationTurn] {
        let start = self.conversation_history.len().saturating_sub(n);
        &self.conversation_history[start..]
    }

    // ── mutation (turn policy only) ────────────────────────────────────

    /// Appends a sentiment record and raises the risk ceiling.
    ///
    /// The stored level moves to `max(current, observed)` under
    /// low < moderate < high < severe; it is never lowered.
    pub fn apply_sentiment(&mut self, record: SentimentRecord) {
        self.risk_level = self.risk_level.max(record.risk);
        self.sentiment_history.push(record);
    }

    /// Starts a problem cycle: records the classified type and zeroes the
    /// phase counter.
    pub fn collect_problem(&mut self, problem_type: ProblemType) {
        self.problem_type = Some(problem_type);
        self.problem_collected = true;
        self.phase_counter = 0;
    }

    /// Marks that a screener-worthy duration was mentioned.
    pub fn flag_duration(&mut self) {
        self.duration_flagged = true;
    }

    /// Consumes one focused turn.
    pub fn begin_focused_turn(&mut self) {
        self.phase_counter += 1;
    }

    /// Appends a turn to the conversation history.
    ///
    /// Consecutive entries must respect the stage succession relation; a
    /// wrap-up entry can only follow a focused companion entry.
    pub fn push_turn(&mut self, turn: ConversationTurn) {
        if let Some(last) = self.conversation_history.last() {
            debug_assert!(
                last.stage.can_transition_to(&turn.stage),
                "invalid stage succession: {:?} -> {:?}",
                last.stage,
                turn.stage
            );
        }
        self.conversation_history.push(turn);
    }

    /// Counts one processed message toward the current cycle.
    pub fn increment_message_count(&mut self) {
        self.message_count += 1;
    }

    /// Remembers the last rendered assistant text for repeat suppression.
    pub fn set_last_reply_text(&mut self, text: impl Into<String>) {
        self.last_reply_text = Some(text.into());
    }

    /// Soft reset at wrap-up.
    ///
    /// Clears the problem-cycle fields while preserving `risk_level`,
    /// both histories, and the repeat-suppression text.
    pub fn reset_problem_cycle(&mut self) {
        self.problem_type = None;
        self.problem_collected = false;
        self.phase_counter = 0;
        self.message_count = 0;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(risk: RiskTier) -> SentimentRecord {
        SentimentRecord::new(Sentiment::new(-0.2, 0.6), risk)
    }

    mod risk_merge {
        use super::*;

        #[test]
        fn risk_level_escalates_with_observed_tier() {
            let mut session = SessionState::new();
            session.apply_sentiment(record(RiskTier::Moderate));
            assert_eq!(session.risk_level(), RiskTier::Moderate);

            session.apply_sentiment(record(RiskTier::High));
            assert_eq!(session.risk_level(), RiskTier::High);
        }

        #[test]
        fn risk_level_never_downgrades() {
            let mut session = SessionState::new();
            session.apply_sentiment(record(RiskTier::Severe));
            session.apply_sentiment(record(RiskTier::Low));
            assert_eq!(session.risk_level(), RiskTier::Severe);
        }

        #[test]
        fn risk_level_is_the_max_of_all_history() {
            let mut session = SessionState::new();
            let tiers = [
                RiskTier::Low,
                RiskTier::High,
                RiskTier::Moderate,
                RiskTier::Low,
            ];
            for tier in tiers {
                session.apply_sentiment(record(tier));
            }
            let max_observed = session
                .sentiment_history()
                .iter()
                .map(|r| r.risk)
                .max()
                .unwrap();
            assert_eq!(session.risk_level(), max_observed);
        }

    }

    mod problem_cycle {
        use super::*;

        #[test]
        fn collect_problem_marks_collected_and_zeroes_phase() {
            let mut session = SessionState::new();
            session.begin_focused_turn(); // stray increment should be wiped
            session.collect_problem(ProblemType::Job);

            assert!(session.problem_collected());
            assert_eq!(session.problem_type(), Some(ProblemType::Job));
            assert_eq!(session.phase_counter(), 0);
        }

        #[test]
        fn reset_clears_cycle_fields_and_keeps_history() {
            let mut session = SessionState::new();
            session.collect_problem(ProblemType::Relationship);
            session.begin_focused_turn();
            session.increment_message_count();
            session.apply_sentiment(record(RiskTier::High));
            session.push_turn(ConversationTurn::new(
                "hi",
                "hello",
                None,
                TurnStage::Companion,
            ));

            session.reset_problem_cycle();

            assert_eq!(session.phase_counter(), 0);
            assert_eq!(session.message_count(), 0);
            assert!(!session.problem_collected());
            assert_eq!(session.problem_type(), None);
            // Preserved across the soft reset.
            assert_eq!(session.risk_level(), RiskTier::High);
            assert_eq!(session.conversation_history().len(), 1);
            assert_eq!(session.sentiment_history().len(), 1);
        }
    }

    mod history_window {
        use super::*;

        #[test]
        fn window_returns_most_recent_turns_oldest_first() {
            let mut session = SessionState::new();
            for i in 0..10 {
                session.push_turn(ConversationTurn::new(
                    format!("user {i}"),
                    format!("bot {i}"),
                    None,
                    TurnStage::Companion,
                ));
            }

            let window = session.history_window(6);
            assert_eq!(window.len(), 6);
            assert_eq!(window[0].user_text, "user 4");
            assert_eq!(window[5].user_text, "user 9");
        }

        #[test]
        fn window_larger_than_history_returns_everything() {
            let mut session = SessionState::new();
            session.push_turn(ConversationTurn::new(
                "only",
                "turn",
                None,
                TurnStage::Companion,
            ));
            assert_eq!(session.history_window(6).len(), 1);
        }

        #[test]
        fn window_on_empty_history_is_empty() {
            let session = SessionState::new();
            assert!(session.history_window(6).is_empty());
        }
    }

    mod stage_succession {
        use super::*;

        #[test]
        fn wrap_up_may_follow_a_companion_entry() {
            let mut session = SessionState::new();
            session.push_turn(ConversationTurn::new("a", "b", None, TurnStage::Companion));
            session.push_turn(ConversationTurn::new("c", "d", None, TurnStage::WrapUp));
            assert_eq!(session.conversation_history().len(), 2);
        }

        #[test]
        #[should_panic(expected = "invalid stage succession")]
        fn wrap_up_cannot_directly_follow_crisis() {
            let mut session = SessionState::new();
            session.push_turn(ConversationTurn::new("a", "b", None, TurnStage::Crisis));
            session.push_turn(ConversationTurn::new("c", "d", None, TurnStage::WrapUp));
        }
    }
}
