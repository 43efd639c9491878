//! Mock implementations of port traits
//!
//! Configurable in-memory stand-ins that record how they were called.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{HttpClient, HttpResponse};
use crate::error::TransportError;

// ============================================================================
// Mock HTTP Client
// ============================================================================

#[derive(Debug, Clone)]
enum MockOutcome {
    Respond(HttpResponse),
    Fail(String),
}

/// HTTP client that returns a canned outcome and records requested URLs
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    calls: Arc<RwLock<Vec<String>>>,
    outcome: Arc<RwLock<MockOutcome>>,
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            outcome: Arc::new(RwLock::new(MockOutcome::Respond(HttpResponse::new(200, "[]")))),
        }
    }
}

impl MockHttpClient {
    /// Responds 200 with an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Responds 200 with the given body
    pub fn ok_with(body: Value) -> Self {
        Self::responding(200, body)
    }

    /// Responds with an arbitrary status and JSON body
    pub fn responding(status: u16, body: Value) -> Self {
        Self::responding_raw(status, &body.to_string())
    }

    /// Responds with an arbitrary status and body text, JSON or not
    pub fn responding_raw(status: u16, body: &str) -> Self {
        let mock = Self::default();
        *mock.outcome.write().unwrap() = MockOutcome::Respond(HttpResponse::new(status, body));
        mock
    }

    /// Fails at the transport level, as if the connection dropped
    pub fn failing(message: &str) -> Self {
        let mock = Self::default();
        *mock.outcome.write().unwrap() = MockOutcome::Fail(message.to_string());
        mock
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.write().unwrap().push(url.to_string());

        match &*self.outcome.read().unwrap() {
            MockOutcome::Respond(response) => Ok(response.clone()),
            MockOutcome::Fail(message) => Err(TransportError::Connection(message.clone())),
        }
    }
}
