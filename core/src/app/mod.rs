//! Application layer
//!
//! Contains the two use cases exposed by the crate.
//! Services coordinate between domain entities and ports.

pub mod discount_service;
pub mod posts_service;

pub use discount_service::{calculate_discount, calculate_discount_value};
pub use posts_service::{
    PostsMessages, PostsService, DEFAULT_EMPTY_MESSAGE, DEFAULT_FOUND_MESSAGE,
};
