//! labkit core
//!
//! Two stateless contracts and one small state model:
//! - discount calculation with input validation (`app::discount_service`)
//! - fetching a user's posts through an injected HTTP client (`app::posts_service`)
//! - a counter clamped between zero and a maximum (`domain::entities::counter`)
//!
//! Uses a ports-and-adapters layout: `domain` holds entities and port traits,
//! `adapters` holds the concrete `reqwest` client.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use adapters::ReqwestHttpClient;
pub use app::{calculate_discount, calculate_discount_value, PostsMessages, PostsService};
pub use config::Config;
pub use domain::entities::{BoundedCounter, PostRecord, PostsQueryResult, PriceQuote, UserId};
pub use domain::ports::{HttpClient, HttpResponse};
pub use error::{DomainError, PostsError, TransportError};
