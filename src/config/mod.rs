//! Runtime configuration for the data service.
//!
//! Only the ambient behavior of the service layer is tunable here. The
//! weight and threshold tables are fixed module data, loaded once at
//! startup and never hot-reloaded.

pub mod retry;

pub use retry::{RetryConfig, RetryStrategy};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::errors::{Error, Result};

/// Cache behavior for computed summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Seconds a computed summary stays valid (default: 300)
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BurnmapConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl BurnmapConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache.ttl_seconds == 0 {
            return Err(Error::Configuration(
                "cache.ttl_seconds must be positive".into(),
            ));
        }
        if self.retry.enabled && self.retry.max_retries == 0 {
            return Err(Error::Configuration(
                "retry.max_retries must be at least 1 when retries are enabled".into(),
            ));
        }
        Ok(())
    }
}

// Default value functions for serde
fn default_ttl_seconds() -> u64 {
    300
}
