//! Retry schedule for profile logical failures.
//!
//! A profile request that comes back with `success: false` is retried after a
//! delay. The schedule is exponential with a ceiling, and bounded by default
//! so a persistently failing backend does not keep a retry timer alive for
//! the lifetime of the process.

use std::time::Duration;

/// Delay before the first retry (5 seconds).
const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(5);

/// Ceiling for any single delay (60 seconds).
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

/// Growth factor between consecutive delays.
const DEFAULT_MULTIPLIER: u32 = 2;

/// Retries attempted before giving up.
const DEFAULT_MAX_RETRIES: u32 = 6;

/// Retry schedule.
///
/// Retry `n` (1-based) waits `min(initial_delay * multiplier^(n-1), max_delay)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Growth factor applied per retry. `1` gives a constant delay.
    pub multiplier: u32,
    /// Ceiling for any single delay.
    pub max_delay: Duration,
    /// Maximum number of retries. `None` retries forever.
    pub max_retries: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            multiplier: DEFAULT_MULTIPLIER,
            max_delay: DEFAULT_MAX_DELAY,
            max_retries: Some(DEFAULT_MAX_RETRIES),
        }
    }
}

impl RetryPolicy {
    /// Constant delay, retried forever.
    pub fn fixed(delay: Duration) -> Self {
        Self { initial_delay: delay, multiplier: 1, max_delay: delay, max_retries: None }
    }

    /// Never retry.
    pub fn never() -> Self {
        Self { max_retries: Some(0), ..Self::default() }
    }

    /// Delay before retry number `retry`, or `None` once the retry budget is
    /// exhausted.
    ///
    /// Retries are counted from 1. Retry 0 is treated as the first retry.
    pub fn delay_for(&self, retry: u32) -> Option<Duration> {
        let retry = retry.max(1);
        if self.max_retries.is_some_and(|max| retry > max) {
            return None;
        }

        let factor = self.multiplier.max(1).saturating_pow(retry - 1);
        Some(self.initial_delay.saturating_mul(factor).min(self.max_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_starts_at_five_seconds() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> =
            (1..=7).filter_map(|n| policy.delay_for(n)).map(|d| d.as_secs()).collect();

        assert_eq!(delays, vec![5, 10, 20, 40, 60, 60]);
    }

    #[test]
    fn fixed_schedule_never_gives_up() {
        let policy = RetryPolicy::fixed(Duration::from_secs(5));
        assert_eq!(policy.delay_for(1), Some(Duration::from_secs(5)));
        assert_eq!(policy.delay_for(1_000), Some(Duration::from_secs(5)));
    }

    #[test]
    fn never_gives_up_immediately() {
        assert_eq!(RetryPolicy::never().delay_for(1), None);
    }

    #[test]
    fn huge_retry_counts_saturate_at_ceiling() {
        let policy = RetryPolicy { max_retries: None, ..RetryPolicy::default() };
        assert_eq!(policy.delay_for(u32::MAX), Some(DEFAULT_MAX_DELAY));
    }

    #[test]
    fn retry_zero_counts_as_first_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Some(DEFAULT_INITIAL_DELAY));
        assert_eq!(policy.delay_for(0), policy.delay_for(1));
        assert_eq!(RetryPolicy::never().delay_for(0), None);
    }
}
