/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client-side throttling of API requests
//!
//! A token bucket from the `governor` crate: one token is replenished every
//! `period_seconds / max_requests`, up to `burst_size` tokens.

use crate::application::config::RateLimiterConfig;
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const UNTHROTTLED_PER_SECOND: NonZeroU32 = NonZeroU32::new(1_000).unwrap();

/// Rate limiter shared by every request of a transport
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// A zero `max_requests` is treated as one; a zero period allows
    /// 1000 requests per second.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let replenish = Duration::from_secs(config.period_seconds) / max_requests;
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(UNTHROTTLED_PER_SECOND))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(DefaultDirectRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a token if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
