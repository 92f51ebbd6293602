//! Generic retry with configurable backoff.
//!
//! Retries on any error, sleeping between attempts per the configured
//! strategy, and hands back the last error once the attempt budget is
//! spent. The delay blocks only the logical operation that requested the
//! retry.

use std::fmt::Display;
use std::future::Future;

use crate::config::RetryConfig;

/// Run `operation` until it succeeds or the attempt budget is exhausted.
///
/// With the default linear strategy the waits between attempts are
/// `base`, `2 x base`, and so on.
pub async fn with_retry<T, E, F, Fut>(
    mut operation: F,
    config: &RetryConfig,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    let max_attempts = config.attempts();
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                let delay = config.delay_for_attempt(attempt);
                log::debug!(
                    "Attempt {}/{} failed: {}; retrying in {:?}",
                    attempt,
                    max_attempts,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                log::warn!("Giving up after {} attempt(s): {}", attempt, err);
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryStrategy;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    fn linear_config(max_retries: u32, base_delay_ms: u64) -> RetryConfig {
        RetryConfig {
            enabled: true,
            max_retries,
            base_delay_ms,
            strategy: RetryStrategy::Linear,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_first_attempt_does_not_sleep() {
        let started = Instant::now();
        let result: Result<u32, String> =
            with_retry(|| async { Ok(42) }, &linear_config(3, 1000)).await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fail_twice_then_succeed() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<u32, String> = with_retry(
            || {
                let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt < 3 {
                        Err(format!("transient failure {}", attempt))
                    } else {
                        Ok(7)
                    }
                }
            },
            &linear_config(3, 1000),
        )
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // linear backoff: 1000ms after the first failure, 2000ms after the second
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_returns_last_error() {
        let calls = AtomicU32::new(0);

        let result: Result<u32, String> = with_retry(
            || {
                let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Err(format!("failure {}", attempt)) }
            },
            &linear_config(3, 10),
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(result.unwrap_err(), "failure 3");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_config_attempts_once() {
        let calls = AtomicU32::new(0);
        let config = RetryConfig {
            enabled: false,
            ..RetryConfig::default()
        };

        let result: Result<u32, String> = with_retry(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("nope".to_string()) }
            },
            &config,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
