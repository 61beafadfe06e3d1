//! Retry executor with exponential backoff
//!
//! Wraps one async operation with a bounded retry budget. The policy only
//! decides whether to re-invoke and how long to wait first; it introduces
//! no failure kinds of its own, and the final attempt's error is surfaced
//! unchanged.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::core::error::LlmError;

/// Predicate deciding whether a failure kind is worth another attempt.
pub type RetryPredicate = fn(&LlmError) -> bool;

/// Bounded retry policy with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    min_delay: Duration,
    max_delay: Duration,
    retry_on: RetryPredicate,
}

impl Default for RetryPolicy {
    /// Three total attempts, waiting 1 s then 2 s, retrying only rate
    /// limits and provider-side faults.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(8),
            retry_on: LlmError::is_retryable,
        }
    }
}

impl RetryPolicy {
    /// Policy derived from configuration: the default budget, with the
    /// broad predicate when transport-failure retry is enabled.
    pub fn from_config(config: &LlmConfig) -> Self {
        if config.retry_transport_errors {
            Self {
                retry_on: LlmError::is_retryable_or_transport,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// Override the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Override the backoff window. Used by tests to keep wall time down.
    pub fn with_delays(mut self, min_delay: Duration, max_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self.max_delay = max_delay;
        self
    }

    /// Override the retry predicate.
    pub fn with_predicate(mut self, retry_on: RetryPredicate) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Execute `f` under this policy.
    ///
    /// The backoff doubles each retry, clamped to the configured maximum,
    /// and is applied before each re-invocation, never before the first
    /// attempt.
    ///
    /// # Errors
    ///
    /// The last attempt's failure, unchanged.
    pub async fn call<F, Fut, T>(&self, mut f: F) -> Result<T, LlmError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, LlmError>>,
    {
        let mut attempt = 0;
        let mut delay = self.min_delay;

        loop {
            attempt += 1;

            match f().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Retry succeeded on attempt {}", attempt);
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if attempt >= self.max_attempts || !(self.retry_on)(&error) {
                        return Err(error);
                    }

                    warn!(
                        category = error.category(),
                        "Attempt {} failed: {}, retrying in {:?}", attempt, error, delay
                    );

                    tokio::time::sleep(delay).await;
                    delay = std::cmp::min(delay * 2, self.max_delay);
                }
            }
        }
    }
}
