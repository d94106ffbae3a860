/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! Client-side throttling with the `governor` crate so that bursts from list
//! views do not hammer the accounting backend.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const MIN_REPLENISH: Duration = Duration::from_millis(1);

/// Rate limiter for controlling API request rates
///
/// Token bucket: `burst_size` requests may go out at once, after which one
/// request is allowed every `period_seconds / max_requests`.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// use lifeline_client::application::config::RateLimiterConfig;
    /// use lifeline_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// });
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let period_ms = config.period_seconds.saturating_mul(1000);
        let per_request = Duration::from_millis(period_ms / u64::from(config.max_requests.max(1)))
            .max(MIN_REPLENISH);

        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(per_request)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Checks if a request can be made immediately, consuming a cell if so
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
