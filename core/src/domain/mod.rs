//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Value types the services produce and consume
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
