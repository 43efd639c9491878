//! reqwest HTTP client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::{HttpClient, HttpResponse};
use crate::error::TransportError;

/// Implementation of the HTTP client port on top of `reqwest`
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured client (proxies, TLS roots, ...)
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<HttpResponse, TransportError> {
        let status = response.status();

        if status.is_success() {
            // Losing the connection mid-body is a transport failure; decoding is not ours
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(HttpResponse::new(status.as_u16(), body))
        } else {
            // Error bodies are informational only
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse::new(status.as_u16(), body))
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        tracing::debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        self.handle_response(response).await
    }
}
