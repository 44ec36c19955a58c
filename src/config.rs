//! Client Configuration
//!
//! All tunables of the client are carried in a single injected [`ClientConfig`]
//! value. There is deliberately no module-level base-URL global: every session
//! (and every test) gets its own configuration, so multiple sessions can talk
//! to different endpoints in the same process.

use std::time::Duration;

/// Configuration for one client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the search/classification service, without a trailing slash.
    pub api_base_url: String,
    /// Results per page. Fixed for the lifetime of a session.
    pub page_size: usize,
    /// Quiet interval after the last keystroke before a search is committed.
    pub debounce_delay: Duration,
    /// Upper bound on a single HTTP request. Expiry surfaces as a transport error.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            page_size: 10,
            debounce_delay: Duration::from_millis(300),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from the environment, falling back to defaults.
    ///
    /// Recognised variables: `API_BASE_URL`, `PAGE_SIZE`, `DEBOUNCE_MS`,
    /// `REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = std::env::var("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let page_size = std::env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&size| size > 0)
            .unwrap_or(defaults.page_size);

        let debounce_delay = std::env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce_delay);

        let request_timeout = std::env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);

        Self {
            api_base_url,
            page_size,
            debounce_delay,
            request_timeout,
        }
    }

    /// Replaces the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }
}
