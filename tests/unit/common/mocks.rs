//! Fake implementation of the assistant port
//!
//! Replies are configured up front; an optional hook runs while a request
//! is "in flight" so tests can edit the session file mid-request.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use regex_rocket::core::ports::{AssistKind, Assistant, AssistantError};

type Hook = Box<dyn Fn() + Send + Sync>;

/// Assistant returning canned replies
pub struct FakeAssistant {
    reply: Result<String, AssistKind>,
    during_request: Option<Hook>,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl FakeAssistant {
    /// Answer every request with `text`
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            during_request: None,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Fail every request
    pub fn failing(kind: AssistKind) -> Self {
        Self {
            reply: Err(kind),
            ..Self::replying("")
        }
    }

    /// Run `hook` before each reply is returned
    pub fn during_request(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.during_request = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().unwrap().clone()
    }

    fn answer(&self, kind: AssistKind, input: &str) -> Result<String, AssistantError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some(input.to_string());
        if let Some(hook) = &self.during_request {
            hook();
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(_) => Err(AssistantError::new(kind, "fake failure")),
        }
    }
}

impl Assistant for FakeAssistant {
    async fn generate_pattern(&self, description: &str) -> Result<String, AssistantError> {
        self.answer(AssistKind::GeneratePattern, description)
    }

    async fn explain_pattern(&self, pattern: &str) -> Result<String, AssistantError> {
        self.answer(AssistKind::ExplainPattern, pattern)
    }

    async fn generate_sample_text(&self, pattern: &str) -> Result<String, AssistantError> {
        self.answer(AssistKind::GenerateSample, pattern)
    }
}
