//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks record every call, so tests can assert on URLs and call counts.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
