//! Triage policy configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::triage::TurnPolicyConfig;

/// Tuning knobs for the turn policy.
#[derive(Debug, Clone, Deserialize)]
pub struct TriageConfig {
    /// Focused turns allowed on one problem before a forced wrap-up
    #[serde(default = "default_phase_limit")]
    pub problem_phase_limit: u32,

    /// Reserved: long-session summarization threshold. Loaded and
    /// validated but not wired into the decision logic.
    #[serde(default = "default_wrap_up_threshold")]
    pub wrap_up_threshold: u32,

    /// Known duration (days) at or above which a screener is suggested
    #[serde(default = "default_screener_days")]
    pub screener_duration_days: u32,

    /// Recent turns supplied to the generator as context
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl TriageConfig {
    /// Converts to the domain-level policy config.
    pub fn to_policy_config(&self) -> TurnPolicyConfig {
        TurnPolicyConfig {
            problem_phase_limit: self.problem_phase_limit,
            screener_duration_days: self.screener_duration_days,
            history_window: self.history_window,
        }
    }

    /// Validate triage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.problem_phase_limit == 0 {
            return Err(ValidationError::InvalidPhaseLimit);
        }
        if self.wrap_up_threshold == 0 {
            return Err(ValidationError::InvalidWrapUpThreshold);
        }
        if self.history_window == 0 {
            return Err(ValidationError::InvalidHistoryWindow);
        }
        Ok(())
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            problem_phase_limit: default_phase_limit(),
            wrap_up_threshold: default_wrap_up_threshold(),
            screener_duration_days: default_screener_days(),
            history_window: default_history_window(),
        }
    }
}

fn default_phase_limit() -> u32 {
    4
}

fn default_wrap_up_threshold() -> u32 {
    35
}

fn default_screener_days() -> u32 {
    14
}

fn default_history_window() -> usize {
    6
}
