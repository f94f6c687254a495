//! Triage service - per-session wiring of the turn policy.
//!
//! Holds one exclusively owned [`SessionState`] per conversation behind its
//! own lock. One turn is fully processed per session before the next is
//! accepted; distinct sessions proceed concurrently with no shared mutable
//! state between them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::triage::{ReplyRecord, SessionState, TurnPolicy, TurnPolicyConfig};
use crate::ports::{ReplyGenerator, SentimentScorer};

/// Application-level facade over the turn policy.
pub struct TriageService {
    policy: TurnPolicy,
    sessions: Mutex<HashMap<String, Arc<Mutex<SessionState>>>>,
}

impl TriageService {
    /// Wires a service from collaborator ports and policy knobs.
    pub fn new(
        generator: Arc<dyn ReplyGenerator>,
        scorer: Arc<dyn SentimentScorer>,
        config: TurnPolicyConfig,
    ) -> Self {
        Self {
            policy: TurnPolicy::new(generator, scorer).with_config(config),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Processes one turn for the given session, creating the session on
    /// first contact.
    ///
    /// The per-session lock serializes turns within a conversation; the
    /// registry lock is only held long enough to look up or insert the
    /// session entry.
    pub async fn process_turn(&self, session_id: &str, text: &str) -> ReplyRecord {
        let session = {
            let mut sessions = self.sessions.lock().await;
            Arc::clone(sessions.entry(session_id.to_string()).or_insert_with(|| {
                debug!(session_id, "creating session");
                Arc::new(Mutex::new(SessionState::new()))
            }))
        };

        let mut state = session.lock().await;
        self.policy.process_turn(&mut state, text).await
    }

    /// Number of sessions currently held.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
