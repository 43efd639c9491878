//! User posts service
//!
//! Fetches a user's posts through the `HttpClient` port and normalizes the
//! response into a `PostsQueryResult`. One request per call, no retries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{PostRecord, PostsQueryResult, UserId};
use crate::domain::ports::HttpClient;
use crate::error::PostsError;

/// Placeholder replaced by the post count in `PostsMessages::found`
pub const COUNT_PLACEHOLDER: &str = "{count}";

pub const DEFAULT_FOUND_MESSAGE: &str = "Se encontraron {count} posts.";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No se encontraron posts para este usuario.";

/// Summary templates for fetch results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsMessages {
    /// Used when at least one post came back; `{count}` is substituted
    pub found: String,
    /// Used when the user has no posts
    pub empty: String,
}

impl Default for PostsMessages {
    fn default() -> Self {
        Self {
            found: DEFAULT_FOUND_MESSAGE.to_string(),
            empty: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl PostsMessages {
    pub fn render(&self, count: usize) -> String {
        if count == 0 {
            self.empty.clone()
        } else {
            self.found.replace(COUNT_PLACEHOLDER, &count.to_string())
        }
    }
}

/// Service for fetching a user's posts
pub struct PostsService<H>
where
    H: HttpClient,
{
    http: Arc<H>,
    base_url: String,
    messages: PostsMessages,
}

impl<H> PostsService<H>
where
    H: HttpClient,
{
    pub fn new(http: Arc<H>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            messages: PostsMessages::default(),
        }
    }

    pub fn from_config(http: Arc<H>, config: &Config) -> Self {
        Self::new(http, &config.posts_api_url).with_messages(config.messages.clone())
    }

    pub fn with_messages(mut self, messages: PostsMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn posts_url(&self, user_id: &UserId) -> String {
        format!("{}/posts?userId={}", self.base_url, encode(user_id.as_str()))
    }

    /// Fetch all posts for `user_id`
    ///
    /// - transport failure: `PostsError::Network`, cause preserved
    /// - non-2xx status: `PostsError::Http`
    /// - body not an array of posts: `PostsError::Deserialization`
    /// - empty array is a valid result, not an error
    pub async fn fetch_user_posts(
        &self,
        user_id: impl Into<UserId>,
    ) -> Result<PostsQueryResult, PostsError> {
        let user_id = user_id.into();
        let url = self.posts_url(&user_id);

        tracing::debug!(%user_id, %url, "Fetching user posts");

        let response = self.http.get(&url).await.map_err(|e| {
            tracing::warn!(%user_id, error = %e, "Posts request failed");
            PostsError::Network(e)
        })?;

        if !response.is_ok() {
            tracing::warn!(
                %user_id,
                status = response.status,
                "Posts API returned an error status"
            );
            return Err(PostsError::Http {
                status: response.status,
            });
        }

        let posts: Vec<PostRecord> = response.json().map_err(|e| {
            tracing::warn!(%user_id, error = %e, "Posts API returned an undecodable body");
            PostsError::Deserialization(e.to_string())
        })?;

        let message = self.messages.render(posts.len());
        tracing::debug!(%user_id, count = posts.len(), "Fetched user posts");

        Ok(PostsQueryResult::new(posts, message))
    }
}
