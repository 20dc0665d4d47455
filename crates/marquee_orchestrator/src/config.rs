//! Fan-out tuning.

use marquee_error::{ConfigError, MarqueeResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[generation]` settings.
///
/// # Examples
///
/// ```
/// use marquee_orchestrator::GenerationConfig;
///
/// let config = GenerationConfig::default().with_timeout_ms(5_000);
/// assert_eq!(*config.timeout_ms(), 5_000);
/// assert_eq!(*config.max_retries(), 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Timeout for one generator call in milliseconds (default 20000).
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,

    /// Retries after the first failed call (default 1).
    #[serde(default = "default_max_retries")]
    max_retries: usize,

    /// Delay before the first retry in milliseconds (default 250).
    ///
    /// Each later retry waits twice as long as the one before.
    #[serde(default = "default_retry_backoff_ms")]
    retry_backoff_ms: u64,

    /// Upper bound for one backoff delay in milliseconds (default 2000).
    #[serde(default = "default_max_retry_delay_ms")]
    max_retry_delay_ms: u64,

    /// Platforms generated at the same time (default 8).
    #[serde(default = "default_max_concurrent")]
    max_concurrent: usize,

    /// Reject platforms without a rule instead of applying the baseline.
    #[serde(default)]
    strict_platforms: bool,
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_max_retries() -> usize {
    1
}

fn default_retry_backoff_ms() -> u64 {
    250
}

fn default_max_retry_delay_ms() -> u64 {
    2_000
}

fn default_max_concurrent() -> usize {
    8
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            max_retry_delay_ms: default_max_retry_delay_ms(),
            max_concurrent: default_max_concurrent(),
            strict_platforms: false,
        }
    }
}

impl GenerationConfig {
    /// Backoff before each retry, without jitter.
    ///
    /// ```
    /// use marquee_orchestrator::GenerationConfig;
    /// use std::time::Duration;
    ///
    /// let delays = GenerationConfig::default().with_max_retries(3).retry_delays();
    /// assert_eq!(delays, [250, 500, 1000].map(Duration::from_millis));
    /// ```
    pub fn retry_delays(&self) -> Vec<Duration> {
        (0..self.max_retries)
            .map(|retry| {
                let factor = u32::try_from(retry)
                    .ok()
                    .and_then(|shift| 1u64.checked_shl(shift))
                    .unwrap_or(u64::MAX);
                let delay = self.retry_backoff_ms.saturating_mul(factor);
                Duration::from_millis(delay.min(self.max_retry_delay_ms))
            })
            .collect()
    }

    /// Validates that timeouts and concurrency are positive.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the offending key.
    pub fn validate(&self) -> MarqueeResult<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::new("generation.timeout_ms must be positive").into());
        }
        if self.max_concurrent == 0 {
            return Err(ConfigError::new("generation.max_concurrent must be positive").into());
        }
        if self.retry_backoff_ms == 0 && self.max_retries > 0 {
            return Err(ConfigError::new(
                "generation.retry_backoff_ms must be positive when retries are enabled",
            )
            .into());
        }
        Ok(())
    }
}
