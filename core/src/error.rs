//! Unified error types for labkit
//!
//! This module defines error types for each layer:
//! - `DomainError`: Input validation failures from pure computations
//! - `TransportError`: The outbound HTTP call could not complete
//! - `PostsError`: Failures surfaced by the posts fetcher

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }
}

/// HTTP transport errors (the request never produced a response)
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Connection(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Posts fetcher errors
#[derive(Debug, Error)]
pub enum PostsError {
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl PostsError {
    /// Status code for HTTP failures, `None` for everything else
    pub fn status(&self) -> Option<u16> {
        match self {
            PostsError::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, PostsError::Network(_))
    }
}
