//! Runtime configuration.
//!
//! Defaults match the hosted demo feed. Environment variables override the
//! defaults and command-line flags override the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `NEWSDECK_ENDPOINT` | Posts endpoint URL | jsonplaceholder posts |
//! | `NEWSDECK_PAGE_SIZE` | Posts per page | 6 |
//! | `NEWSDECK_LOG` | Log filter directive | `info` |

use std::time::Duration;

use thiserror::Error;

use crate::client::DEFAULT_POSTS_URL;
use crate::pagination::PAGE_SIZE;

pub const ENV_ENDPOINT: &str = "NEWSDECK_ENDPOINT";
pub const ENV_PAGE_SIZE: &str = "NEWSDECK_PAGE_SIZE";
pub const ENV_LOG: &str = "NEWSDECK_LOG";

/// Upper bound on how long the loading screen stays up
pub const LOADING_TIMEOUT: Duration = Duration::from_millis(5000);

/// How long the feedback confirmation stays before the modal closes
pub const FEEDBACK_DISMISS_DELAY: Duration = Duration::from_millis(1200);

/// Per-request timeout for the posts fetch
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidPageSize { var: String, value: String },

    #[error("endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
}

/// Settings for one browsing session.
///
/// # Example
///
/// ```
/// use newsdeck::config::BrowserConfig;
///
/// let config = BrowserConfig::default()
///     .with_endpoint("http://localhost:3000/posts")
///     .with_page_size(9);
/// assert_eq!(config.page_size, 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// URL returning the JSON array of posts
    pub endpoint: String,
    /// Posts per page
    pub page_size: usize,
    /// Loading screen ceiling
    pub loading_timeout: Duration,
    /// Feedback confirmation auto-dismiss delay
    pub feedback_dismiss: Duration,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// `tracing` filter directive for the log file
    pub log_filter: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_POSTS_URL.to_string(),
            page_size: PAGE_SIZE,
            loading_timeout: LOADING_TIMEOUT,
            feedback_dismiss: FEEDBACK_DISMISS_DELAY,
            request_timeout: REQUEST_TIMEOUT,
            log_filter: "info".to_string(),
        }
    }
}

impl BrowserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_loading_timeout(mut self, timeout: Duration) -> Self {
        self.loading_timeout = timeout;
        self
    }

    pub fn with_feedback_dismiss(mut self, delay: Duration) -> Self {
        self.feedback_dismiss = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Build a config from the defaults plus `NEWSDECK_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(None, None)
    }

    /// Like [`from_env`](Self::from_env), with command-line values taking
    /// precedence. A variable shadowed by a flag is never read, so a bad
    /// value there cannot abort startup. The result is validated once.
    pub fn from_env_with(
        endpoint: Option<String>,
        page_size: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match endpoint {
            Some(endpoint) => config.endpoint = endpoint,
            None => {
                if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
                    if !endpoint.trim().is_empty() {
                        config.endpoint = endpoint.trim().to_string();
                    }
                }
            }
        }

        match page_size {
            Some(page_size) => config.page_size = page_size,
            None => {
                if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
                    config.page_size = parse_page_size(ENV_PAGE_SIZE, &raw)?;
                }
            }
        }

        if let Ok(filter) = std::env::var(ENV_LOG) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the values that can come from the user.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize {
                var: ENV_PAGE_SIZE.to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_page_size(var: &str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidPageSize {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}
