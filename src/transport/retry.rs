/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use std::time::Duration;

/// Retry behaviour of [`HttpTransport`](crate::transport::HttpTransport) on
/// `429 Too Many Requests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries (`Some(0)` disables retrying, `None` retries forever)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries
    pub retry_delay_secs: u64,
}

impl RetryConfig {
    /// Configuration read from `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retry_count: Some(0),
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }

    /// Retries forever with the default delay
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }

    /// Retries at most `max_retries` times with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }

    /// Replaces the delay between retries
    #[must_use]
    pub fn with_delay(mut self, delay_secs: u64) -> Self {
        self.retry_delay_secs = delay_secs;
        self
    }

    /// Whether retry number `attempt` (1-based) is allowed
    #[must_use]
    pub fn allows(&self, attempt: u32) -> bool {
        self.max_retry_count.is_none_or(|max| attempt <= max)
    }

    /// Delay before the next retry
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: Some(
                get_env_or_none("MAX_RETRY_COUNT").unwrap_or(DEFAULT_MAX_RETRIES),
            ),
            retry_delay_secs: get_env_or_none("RETRY_DELAY_SECS")
                .unwrap_or(DEFAULT_RETRY_DELAY_SECS),
        }
    }
}
