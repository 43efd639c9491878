use std::env;

use crate::app::PostsMessages;

/// Default upstream for the posts API
pub const DEFAULT_POSTS_API_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the `/posts` path is appended to
    pub posts_api_url: String,
    /// Summary templates for fetch results
    pub messages: PostsMessages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_api_url: DEFAULT_POSTS_API_URL.to_string(),
            messages: PostsMessages::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env, map, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PostsMessages::default();

        Self {
            posts_api_url: lookup("POSTS_API_URL")
                .unwrap_or_else(|| DEFAULT_POSTS_API_URL.to_string()),
            messages: PostsMessages {
                found: lookup("POSTS_FOUND_MESSAGE").unwrap_or(defaults.found),
                empty: lookup("POSTS_EMPTY_MESSAGE").unwrap_or(defaults.empty),
            },
        }
    }
}
