//! Exponential backoff for AI requests.
//!
//! Every failed attempt (transport error, non-success status, malformed body)
//! is retried until `max_attempts` is reached. After failed attempt `i`
//! (0-based) the gateway waits `base_delay × 2^i`, so the default policy of 3
//! attempts with a 1 s base waits 1 s and then 2 s. No wait follows the last
//! attempt.

use std::time::Duration;

use cfx_config::AiConfig;

/// Retry behavior for AI requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one). At least 1.
    pub max_attempts: u32,
    /// Wait after the first failed attempt; doubles after each further failure.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    #[must_use]
    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.base_delay_ms),
        )
    }

    /// Wait after failed attempt `attempt_index` (0-based): `base × 2^index`,
    /// saturating instead of overflowing.
    #[must_use]
    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt_index).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// The backoff schedule, one entry per attempt: `base×1, base×2, base×4, …`.
    pub fn schedule(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.max_attempts).map(|index| self.delay_for(index))
    }

    /// The waits actually taken when every attempt fails: the schedule minus
    /// its last entry.
    pub fn waits(&self) -> impl Iterator<Item = Duration> + '_ {
        self.schedule().take(self.max_attempts.saturating_sub(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_observed_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay, Duration::from_secs(1));
    }

    #[test]
    fn schedule_doubles() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1000));
        let schedule: Vec<u128> = policy.schedule().map(|d| d.as_millis()).collect();
        assert_eq!(schedule, vec![1000, 2000, 4000]);
    }

    #[test]
    fn waits_skip_the_final_attempt() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1000));
        let waits: Vec<u128> = policy.waits().map(|d| d.as_millis()).collect();
        assert_eq!(waits, vec![1000, 2000]);
    }

    #[test]
    fn zero_attempts_clamped_to_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(10));
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.waits().count(), 0);
    }

    #[test]
    fn huge_index_saturates() {
        let policy = RetryPolicy::new(3, Duration::from_secs(1));
        assert_eq!(policy.delay_for(64), Duration::from_secs(u64::from(u32::MAX)));
    }

    #[test]
    fn from_config_uses_configured_values() {
        let config = AiConfig {
            max_attempts: 5,
            base_delay_ms: 250,
            ..Default::default()
        };
        let policy = RetryPolicy::from_config(&config);
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
    }
}
