//! In-memory stand-ins for the external call and the pacing policy.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{Completer, LlmError};
use crate::pacing::Pacer;

/// A prompt as seen by `ScriptedCompleter`. `system` is `None` for `complete`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system: Option<String>,
    pub user: String,
    pub max_output_tokens: u32,
}

/// Replays canned replies in order and records every call it receives.
/// Once the script runs out every call fails with `EmptyContent`.
pub struct ScriptedCompleter {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompleter {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// User-message text of every call, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.user).collect()
    }

    fn next(&self, call: RecordedCall) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

#[async_trait]
impl Completer for ScriptedCompleter {
    async fn complete(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        _temperature: f64,
    ) -> Result<String, LlmError> {
        self.next(RecordedCall {
            system: None,
            user: prompt.to_string(),
            max_output_tokens,
        })
    }

    async fn chat(
        &self,
        system: &str,
        user: &str,
        max_output_tokens: u32,
        _temperature: f64,
    ) -> Result<String, LlmError> {
        self.next(RecordedCall {
            system: Some(system.to_string()),
            user: user.to_string(),
            max_output_tokens,
        })
    }
}

#[derive(Default)]
pub struct CountingPacer(AtomicUsize);

impl CountingPacer {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
