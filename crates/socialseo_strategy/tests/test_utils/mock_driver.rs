//! Mock generative driver for testing.

use async_trait::async_trait;
use socialseo_core::{ContentRequest, ContentResponse, GroundingSource};
use socialseo_error::{GeminiError, GeminiErrorKind, SocialSeoError, SocialSeoResult};
use socialseo_interface::GenerativeDriver;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Reply with this text
    Success(String),
    /// Reply with no text payload at all
    Empty,
    /// Fail with this transport error
    Error(GeminiErrorKind),
}

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always reply with the same response
    Always(MockResponse),
    /// Reply with each response in turn, failing once exhausted
    Sequence(Vec<MockResponse>),
}

/// Scripted driver that records every request it receives.
pub struct MockDriver {
    behavior: MockBehavior,
    sources: Vec<GroundingSource>,
    requests: Arc<Mutex<Vec<ContentRequest>>>,
    credential: bool,
    delay: Duration,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            sources: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            credential: true,
            delay: Duration::from_millis(1),
            gate: None,
        }
    }

    /// Always succeed with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Always(MockResponse::Success(text.into())))
    }

    /// Always reply without a text payload.
    pub fn new_empty() -> Self {
        Self::new_with_behavior(MockBehavior::Always(MockResponse::Empty))
    }

    /// Always fail with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Always(MockResponse::Error(error)))
    }

    /// Reply with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Attach grounding sources to every successful reply.
    pub fn with_sources(mut self, sources: Vec<GroundingSource>) -> Self {
        self.sources = sources;
        self
    }

    /// Report a missing credential.
    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Hold every call until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ContentRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn record(&self, req: &ContentRequest) -> usize {
        let mut requests = self.requests.lock().unwrap();
        requests.push(req.clone());
        requests.len() - 1
    }

    fn reply(&self, index: usize) -> SocialSeoResult<ContentResponse> {
        let response = match &self.behavior {
            MockBehavior::Always(response) => response.clone(),
            MockBehavior::Sequence(responses) => match responses.get(index) {
                Some(response) => response.clone(),
                None => MockResponse::Error(GeminiErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    index + 1,
                    responses.len()
                ))),
            },
        };

        match response {
            MockResponse::Success(text) => Ok(ContentResponse {
                text: Some(text),
                sources: self.sources.clone(),
            }),
            MockResponse::Empty => Ok(ContentResponse::default()),
            MockResponse::Error(kind) => Err(SocialSeoError::from(GeminiError::new(kind))),
        }
    }
}

#[async_trait]
impl GenerativeDriver for MockDriver {
    async fn generate(&self, req: &ContentRequest) -> SocialSeoResult<ContentResponse> {
        let index = self.record(req);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        tokio::time::sleep(self.delay).await;
        self.reply(index)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }

    fn has_credential(&self) -> bool {
        self.credential
    }
}
