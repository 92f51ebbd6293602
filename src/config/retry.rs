//! Retry configuration for the resilient data service.
//!
//! Transient upstream failures (connection resets, transient 5xx) are
//! retried with a configurable backoff before the fallback path takes
//! over.
//!
//! # Configuration Example
//!
//! ```toml
//! [retry]
//! enabled = true
//! max_retries = 3
//! base_delay_ms = 1000
//! strategy = "linear"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry behavior for upstream fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetryConfig {
    /// Enable automatic retries (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum number of attempts, including the first (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between attempts in milliseconds (default: 1000)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Backoff strategy (default: linear)
    #[serde(default)]
    pub strategy: RetryStrategy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            strategy: RetryStrategy::default(),
        }
    }
}

impl RetryConfig {
    /// Create a retry config with retries disabled.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Get the base delay as a Duration.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Total attempts the budget allows; at least one even when retries
    /// are disabled.
    pub fn attempts(&self) -> u32 {
        if self.enabled {
            self.max_retries.max(1)
        } else {
            1
        }
    }

    /// Calculate the delay after a specific failed attempt.
    ///
    /// The attempt number is 1-indexed (first attempt is attempt 1).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.base_delay_ms as f64;
        let delay_ms = match self.strategy {
            RetryStrategy::Constant => base_ms,
            RetryStrategy::Linear => base_ms * (attempt as f64),
            RetryStrategy::Exponential => base_ms * 2.0_f64.powi(attempt as i32 - 1),
        };
        Duration::from_millis(delay_ms as u64)
    }
}

/// Retry delay strategy.
///
/// Determines how the delay between attempts changes as failures pile up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStrategy {
    /// Same delay between each retry.
    Constant,
    /// Delay increases linearly: base * attempt.
    Linear,
    /// Delay doubles each attempt: base * 2^(attempt-1).
    Exponential,
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::Linear
    }
}

// Default value functions for serde
fn default_enabled() -> bool {
    true
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}
