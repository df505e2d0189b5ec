// Bounded exponential-backoff retry for service calls.
//
// Only errors classified retryable by ServiceError::is_retryable are
// retried; everything else surfaces immediately.

use super::errors::ServiceError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            jitter: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct RetryHandler {
    config: RetryConfig,
}

impl RetryHandler {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Run `operation`, retrying retryable failures with exponential
    /// backoff until `max_attempts` is exhausted.
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, ServiceError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(attempt, "service call succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(error) if error.is_retryable() && attempt < self.config.max_attempts => {
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "retryable service failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = self
            .config
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt - 1))
            .min(self.config.max_delay);
        if self.config.jitter {
            // Up to 100ms of jitter keeps concurrent retries from herding.
            let jitter = rand::rng().random_range(0..100);
            exp + Duration::from_millis(jitter)
        } else {
            exp
        }
    }
}
