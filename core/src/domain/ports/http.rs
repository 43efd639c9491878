//! HTTP client port trait
//!
//! The one outbound capability the services need: perform a GET and hand
//! back the status plus the raw body. Decoding is left to the caller, so a
//! completed request with an unexpected body never looks like a failed one.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// A completed HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Transport-level "ok" flag: any 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET to `url`. `Err` only when no response was received.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
