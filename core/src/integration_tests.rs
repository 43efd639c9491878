//! End-to-end wiring tests
//!
//! Config -> service -> mock transport, the way the binary assembles them.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::app::{calculate_discount, PostsService};
    use crate::config::Config;
    use crate::domain::entities::BoundedCounter;
    use crate::error::PostsError;
    use crate::test_utils::{test_posts_json, MockHttpClient};

    #[tokio::test]
    async fn service_from_config_uses_configured_base_and_messages() {
        let config = Config::from_lookup(|key| match key {
            "POSTS_API_URL" => Some("http://posts.internal/api/".to_string()),
            "POSTS_FOUND_MESSAGE" => Some("{count} post(s) found".to_string()),
            _ => None,
        });
        let http = Arc::new(MockHttpClient::ok_with(test_posts_json(9, 2)));
        let service = PostsService::from_config(http.clone(), &config);

        let result = service.fetch_user_posts(9i64).await.unwrap();

        assert_eq!(http.calls(), vec!["http://posts.internal/api/posts?userId=9".to_string()]);
        assert_eq!(result.message(), "2 post(s) found");
    }

    #[tokio::test]
    async fn default_config_keeps_original_messages() {
        let http = Arc::new(MockHttpClient::ok_with(json!([])));
        let service = PostsService::from_config(http, &Config::default());

        let result = service.fetch_user_posts(1i64).await.unwrap();

        assert_eq!(result.count(), 0);
        assert_eq!(result.message(), "No se encontraron posts para este usuario.");
    }

    #[tokio::test]
    async fn one_service_serves_independent_calls() {
        let http = Arc::new(MockHttpClient::responding(500, json!({ "error": "boom" })));
        let service = PostsService::from_config(http.clone(), &Config::default());

        for user in [1i64, 2, 3] {
            let err = service.fetch_user_posts(user).await.unwrap_err();
            assert!(matches!(err, PostsError::Http { status: 500 }));
        }

        assert_eq!(http.call_count(), 3);
        assert!(http.calls()[2].ends_with("userId=3"));
    }

    #[test]
    fn discount_and_counter_are_independent_of_config() {
        assert_eq!(calculate_discount(100.0, 20.0).unwrap(), 80.0);

        let mut counter = BoundedCounter::default();
        counter.increment();
        assert_eq!(counter.count(), 1);
    }
}
