//! Post domain entities
//!
//! Posts live upstream (source of truth). `PostRecord` is the domain's view
//! of one item; every field is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of the user whose posts are requested
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id.to_string())
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        UserId(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId(id)
    }
}

/// One post as returned by the upstream API
///
/// Kept as the raw JSON object: the upstream owns the shape, so fields are
/// read leniently and never validated one by one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostRecord(Map<String, Value>);

impl PostRecord {
    pub fn user_id(&self) -> Option<&Value> {
        self.non_null("userId")
    }

    pub fn id(&self) -> Option<&Value> {
        self.non_null("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn body(&self) -> Option<&str> {
        self.0.get("body").and_then(Value::as_str)
    }

    /// Any field, as received
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn non_null(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}

impl From<Map<String, Value>> for PostRecord {
    fn from(fields: Map<String, Value>) -> Self {
        PostRecord(fields)
    }
}

/// Normalized outcome of a posts fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsQueryResult {
    count: usize,
    posts: Vec<PostRecord>,
    message: String,
}

impl PostsQueryResult {
    /// `count` is always derived from `posts`
    pub fn new(posts: Vec<PostRecord>, message: String) -> Self {
        Self {
            count: posts.len(),
            posts,
            message,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn into_posts(self) -> Vec<PostRecord> {
        self.posts
    }
}
