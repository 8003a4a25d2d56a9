use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_BURST_SIZE, DEFAULT_MAX_REQUESTS, DEFAULT_PERIOD_SECONDS,
    DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration of the HTTP transport
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `WL_REST_BASE_URL` | `https://staging.wellnessliving.com` |
    /// | `WL_REST_TIMEOUT` | `30` |
    /// | `WL_RATE_LIMIT_MAX_REQUESTS` | `60` |
    /// | `WL_RATE_LIMIT_PERIOD_SECONDS` | `60` |
    /// | `WL_RATE_LIMIT_BURST_SIZE` | `10` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("WL_REST_BASE_URL", String::from(DEFAULT_BASE_URL));
        if base_url == DEFAULT_BASE_URL {
            warn!("WL_REST_BASE_URL not set, using {}", DEFAULT_BASE_URL);
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("WL_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "WL_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "WL_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default("WL_RATE_LIMIT_BURST_SIZE", DEFAULT_BURST_SIZE),
            },
        }
    }

    /// Configuration pointing at `base_url`, other values from the environment
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.rest_api.base_url = base_url.into();
        config
    }
}
