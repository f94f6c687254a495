//! Turn stages and the derived turn-policy state.
//!
//! `TurnStage` is the externally visible tag on every reply and history
//! entry. `TurnState` is the policy's decision state, derived fresh each
//! turn from the session rather than stored, so transitions stay
//! independently testable.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::{RiskTier, SessionState};

/// Externally visible stage tag carried on replies and history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TurnStage {
    /// Ordinary focused companion reply.
    #[default]
    Companion,

    /// Crisis short-circuit response.
    Crisis,

    /// Wrap-up action plan.
    WrapUp,
}

impl TurnStage {
    /// Wire token for the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Companion => "companion",
            Self::Crisis => "crisis",
            Self::WrapUp => "wrap_up",
        }
    }
}

impl StateMachine for TurnStage {
    /// Valid stage successions across consecutive replies in a session.
    ///
    /// Crisis can follow anything. A wrap-up only ever follows a focused
    /// companion reply: the cycle reset means two wrap-ups can never be
    /// adjacent, and a crisis never advances the phase counter to the limit.
    fn can_transition_to(&self, target: &Self) -> bool {
        match (self, target) {
            (Self::Companion, _) => true,
            (Self::Crisis | Self::WrapUp, Self::WrapUp) => false,
            (Self::Crisis | Self::WrapUp, _) => true,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        [Self::Companion, Self::Crisis, Self::WrapUp]
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

/// The policy's decision state for one turn.
///
/// Evaluated fresh every turn from the live risk classification and the
/// session; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Severe risk language detected; bypass everything else.
    Crisis,

    /// No problem collected yet; classify this text and start a cycle.
    Collecting,

    /// Inside an active focused phase; `phase` is the counter value
    /// before this turn increments it.
    Focused { phase: u32 },

    /// Phase limit already consumed; the next action is a wrap-up.
    WrapUp,
}

impl TurnState {
    /// Derives the decision state for the current turn.
    ///
    /// Precedence is fixed: crisis beats everything, collection beats the
    /// focused phase, and an exhausted phase counter forces wrap-up.
    pub fn derive(current_risk: RiskTier, session: &SessionState, phase_limit: u32) -> Self {
        if current_risk == RiskTier::Severe {
            return Self::Crisis;
        }
        if !session.problem_collected() {
            return Self::Collecting;
        }
        if session.phase_counter() < phase_limit {
            return Self::Focused {
                phase: session.phase_counter(),
            };
        }
        Self::WrapUp
    }
}
