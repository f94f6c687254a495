//! Mock reply generator for testing.
//!
//! Scriptable implementation of the [`ReplyGenerator`] port: queued
//! replies and errors are consumed in order, and every request is recorded
//! for verification. An empty queue yields an unavailable error so policy
//! fallback paths stay deterministic in tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{GenerationRequest, GeneratorError, ReplyGenerator};

/// A scripted outcome for one generate call.
#[derive(Debug)]
enum ScriptedOutcome {
    Reply(String),
    Error(GeneratorError),
}

/// Scriptable mock generator.
///
/// Clones share the same script and call log, so a test can keep a clone
/// for assertions while handing the original to the policy.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    outcomes: Arc<Mutex<VecDeque<ScriptedOutcome>>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGenerator {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(ScriptedOutcome::Reply(reply.into()));
        self
    }

    /// Queues an error outcome.
    pub fn with_error(self, error: GeneratorError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(ScriptedOutcome::Error(error));
        self
    }

    /// Number of generate calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The most recent request, if any call was made.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ReplyGenerator for MockGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        self.calls.lock().unwrap().push(request);
        match self.outcomes.lock().unwrap().pop_front() {
            Some(ScriptedOutcome::Reply(reply)) => Ok(reply),
            Some(ScriptedOutcome::Error(error)) => Err(error),
            None => Err(GeneratorError::unavailable("no scripted response")),
        }
    }
}
