//! Domain entities
//!
//! Transient values: nothing here is persisted.

pub mod counter;
pub mod post;
pub mod price_quote;

pub use counter::{BoundedCounter, DEFAULT_MAX_VALUE, MAX_WARNING, MIN_VALUE, MIN_WARNING};
pub use post::{PostRecord, PostsQueryResult, UserId};
pub use price_quote::PriceQuote;
