//! Test fixtures
//!
//! Factory functions for upstream payloads with sensible defaults.

use serde_json::{json, Value};

use crate::domain::entities::PostRecord;

/// Raw upstream JSON for one post
pub fn test_post_json(user_id: i64, id: i64) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": format!("Post {}", id),
        "body": format!("Contenido {}", id),
    })
}

/// Raw upstream JSON array of `n` posts for a user, ids starting at 1
pub fn test_posts_json(user_id: i64, n: i64) -> Value {
    Value::Array((1..=n).map(|id| test_post_json(user_id, id)).collect())
}

/// Decoded post record
pub fn test_post(user_id: i64, id: i64) -> PostRecord {
    serde_json::from_value(test_post_json(user_id, id)).unwrap()
}
