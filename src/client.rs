//! HTTP client for the posts endpoint.
//!
//! The whole collection is fetched with a single GET; no paging parameters
//! are sent. [`PostSource`] abstracts the fetch so the loader can be driven by
//! mock sources in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::BrowserConfig;
use crate::models::Post;

pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Error type for fetching posts
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Body was not a JSON array of posts
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can deliver the post collection.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Client for a JSON posts endpoint.
pub struct PostsClient {
    /// Full URL of the collection
    pub endpoint: String,
    client: Client,
}

impl PostsClient {
    /// Client for the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_POSTS_URL.to_string())
    }

    /// Client for a custom endpoint.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// Client for the configured endpoint with the configured request timeout.
    pub fn from_config(config: &BrowserConfig) -> Result<Self, FetchError> {
        Self::with_timeout(config.endpoint.clone(), config.request_timeout)
    }

    pub fn with_timeout(endpoint: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostSource for PostsClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching posts");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::ServerError { status, message });
        }

        let body = response.bytes().await?;
        let posts: Vec<Post> = serde_json::from_slice(&body)?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_uses_default_endpoint() {
        let client = PostsClient::default();
        assert_eq!(client.endpoint, DEFAULT_POSTS_URL);
    }

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = BrowserConfig::default().with_endpoint("http://localhost:1234/posts");
        let client = PostsClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint, "http://localhost:1234/posts");
    }

    #[test]
    fn test_server_error_display() {
        let err = FetchError::ServerError {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (503): down");
    }

    #[test]
    fn test_json_error_from_serde() {
        let err: FetchError = serde_json::from_str::<Vec<Post>>("{}").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
