//! Turn policy - the per-turn state machine.
//!
//! Each incoming message is classified, the decision state is derived from
//! the session, and exactly one of four actions runs: crisis short-circuit,
//! problem collection, focused reply, or wrap-up. The policy is the only
//! code that mutates [`SessionState`].
//!
//! Failure semantics: generator failures are recovered locally with the
//! deterministic templates and logged at warn level; they are never
//! surfaced to the caller. Malformed or empty input is ordinary text and
//! classifies to other/low.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::{GenerationRequest, ReplyGenerator, SentimentScorer};

use super::{
    parse_duration_days, render, templates, Lexicon, ProblemType, ReplyRecord, RiskTier,
    Sentiment, SentimentRecord, SessionState, TurnStage, TurnState,
};

/// Base system directive shared by all focused replies.
const BASE_DIRECTIVE: &str = "You are a warm, empathetic companion. Be concise and supportive.";

/// Tuning knobs for the turn policy.
#[derive(Debug, Clone)]
pub struct TurnPolicyConfig {
    /// Focused turns allowed on one problem before a forced wrap-up.
    pub problem_phase_limit: u32,
    /// Known duration (days) at or above which a structured screener is
    /// suggested during crisis handling or problem collection.
    pub screener_duration_days: u32,
    /// Number of recent turns supplied to the generator as context.
    pub history_window: usize,
}

impl Default for TurnPolicyConfig {
    fn default() -> Self {
        Self {
            problem_phase_limit: 4,
            screener_duration_days: 14,
            history_window: 6,
        }
    }
}

/// The turn-processing state machine.
///
/// Owns the classification lexicon and the collaborator ports; evaluates
/// every turn fresh from the session state.
pub struct TurnPolicy {
    lexicon: Lexicon,
    generator: Arc<dyn ReplyGenerator>,
    scorer: Arc<dyn SentimentScorer>,
    config: TurnPolicyConfig,
}

impl TurnPolicy {
    /// Creates a policy with the default lexicon and config.
    pub fn new(generator: Arc<dyn ReplyGenerator>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            lexicon: Lexicon::default(),
            generator,
            scorer,
            config: TurnPolicyConfig::default(),
        }
    }

    /// Replaces the classification lexicon.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Replaces the tuning knobs.
    pub fn with_config(mut self, config: TurnPolicyConfig) -> Self {
        self.config = config;
        self
    }

    /// Processes one user turn against the session.
    ///
    /// This is the entire inbound surface of the core. It always returns a
    /// well-formed [`ReplyRecord`]; there are no fatal error paths.
    pub async fn process_turn(&self, session: &mut SessionState, text: &str) -> ReplyRecord {
        let sentiment = self.scorer.score(text);
        let risk = self.lexicon.classify_risk(text);
        session.apply_sentiment(SentimentRecord::new(sentiment, risk));

        let state = TurnState::derive(risk, session, self.config.problem_phase_limit);
        debug!(?state, ?risk, "turn state derived");

        match state {
            TurnState::Crisis => self.crisis_reply(session, text, sentiment),
            TurnState::Collecting => {
                let problem_type = self.lexicon.classify_problem(text);
                session.collect_problem(problem_type);
                if parse_duration_days(text)
                    .is_some_and(|days| days >= self.config.screener_duration_days)
                {
                    session.flag_duration();
                }
                debug!(problem = problem_type.label(), "problem collected");
                // The collecting turn is also the first focused reply; the
                // counter was just zeroed, so it counts as phase 1.
                self.focused_reply(session, text, sentiment, risk).await
            }
            TurnState::Focused { .. } => self.focused_reply(session, text, sentiment, risk).await,
            TurnState::WrapUp => self.wrap_up(session),
        }
    }

    /// Crisis short-circuit: fixed support message, no generator call, no
    /// counter movement.
    ///
    /// The duration is taken from the turn text itself; when it cannot be
    /// parsed it is treated as absent and the screener suggestion is
    /// skipped. `apply_sentiment` has already raised the risk ceiling to
    /// severe before this runs.
    fn crisis_reply(
        &self,
        session: &mut SessionState,
        text: &str,
        sentiment: Sentiment,
    ) -> ReplyRecord {
        let mut reply = templates::CRISIS_MESSAGE.to_string();
        if parse_duration_days(text)
            .is_some_and(|days| days >= self.config.screener_duration_days)
        {
            reply.push(' ');
            reply.push_str(templates::SCREENER_SUGGESTION);
        }

        session.push_turn(super::ConversationTurn::new(
            text,
            reply.clone(),
            Some(sentiment),
            TurnStage::Crisis,
        ));

        render(session, &reply, TurnStage::Crisis, sentiment, RiskTier::Severe)
    }

    /// Focused reply on the collected problem, with template fallback.
    async fn focused_reply(
        &self,
        session: &mut SessionState,
        text: &str,
        sentiment: Sentiment,
        risk: RiskTier,
    ) -> ReplyRecord {
        session.begin_focused_turn();
        let problem_type = session.problem_type().unwrap_or_default();

        let reply = match self.generate(session, text, problem_type).await {
            Ok(generated) if !generated.trim().is_empty() => generated,
            Ok(_) => {
                warn!(problem = problem_type.label(), "generator returned empty reply");
                templates::fallback_reply(problem_type).to_string()
            }
            Err(err) => {
                warn!(error = %err, problem = problem_type.label(), "generator failed, using template");
                templates::fallback_reply(problem_type).to_string()
            }
        };

        session.push_turn(super::ConversationTurn::new(
            text,
            reply.clone(),
            Some(sentiment),
            TurnStage::Companion,
        ));
        session.increment_message_count();

        let record = render(session, &reply, TurnStage::Companion, sentiment, risk);

        // Phase-limit check runs after the reply is recorded. The wrap-up
        // record supersedes the focused record as this turn's output; the
        // focused reply stays in history.
        if session.phase_counter() >= self.config.problem_phase_limit {
            return self.wrap_up(session);
        }
        record
    }

    /// Issues the generation request with a bounded history window.
    async fn generate(
        &self,
        session: &SessionState,
        text: &str,
        problem_type: ProblemType,
    ) -> Result<String, crate::ports::GeneratorError> {
        let directive = format!("{} {}", BASE_DIRECTIVE, problem_type.directive());
        let mut request = GenerationRequest::new(directive, text);
        for turn in session.history_window(self.config.history_window) {
            request = request.with_exchange(turn.user_text.clone(), turn.assistant_text.clone());
        }
        self.generator.generate(request).await
    }

    /// Wrap-up: action plan, history append, soft reset.
    fn wrap_up(&self, session: &mut SessionState) -> ReplyRecord {
        let problem_type = session.problem_type().unwrap_or_default();
        let plan = templates::action_plan(problem_type, session.risk_level());

        session.push_turn(super::ConversationTurn::new(
            "[action_plan]",
            plan.clone(),
            None,
            TurnStage::WrapUp,
        ));

        let record = render(
            session,
            &plan,
            TurnStage::WrapUp,
            Sentiment::neutral(),
            session.risk_level(),
        );

        session.reset_problem_cycle();
        debug!("problem cycle wrapped up and reset");
        record
    }
}
