use crate::constants;
use crate::error::Error;
use std::time::Duration;

/// Fixed-delay retry policy used while waiting on asynchronous provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, the first one included.
    pub max_attempts: usize,
    /// Pause between two consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: constants::VERIFICATION_MAX_ATTEMPTS,
            delay: Duration::from_secs(constants::VERIFICATION_DELAY_SECS),
        }
    }
}

impl RetryConfig {
    /// Delay to wait after `attempt` (1-based) failed, or `None` if no attempts remain.
    #[must_use]
    pub const fn delay_after(&self, attempt: usize) -> Option<Duration> {
        if attempt >= self.max_attempts {
            None
        } else {
            Some(self.delay)
        }
    }

    /// Upper bound on the time spent sleeping across all attempts.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn worst_case_wait(&self) -> Duration {
        self.delay * self.max_attempts.saturating_sub(1) as u32
    }
}

/// Configuration for timeout behavior
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 10_000, // 10 seconds
            request_timeout_ms: 30_000, // 30 seconds
        }
    }
}

/// Creates a resilient HTTP client with timeout configuration
///
/// # Errors
/// Returns an error if the HTTP client cannot be created with the specified configuration
pub fn create_resilient_client(timeout_config: &TimeoutConfig) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_millis(timeout_config.connect_timeout_ms))
        .timeout(Duration::from_millis(timeout_config.request_timeout_ms))
        .user_agent(constants::USER_AGENT)
        .build()
        .map_err(|e| Error::request_failed(format!("Failed to create HTTP client: {e}")))
}
