//! Property-based tests for the retry schedule.

use std::time::Duration;

use proptest::prelude::*;
use staybook_client::RetryPolicy;

fn policy_strategy() -> impl Strategy<Value = RetryPolicy> {
    (1u64..30, 1u32..5, 1u64..600, prop::option::of(0u32..20)).prop_map(
        |(initial, multiplier, max, max_retries)| RetryPolicy {
            initial_delay: Duration::from_secs(initial),
            multiplier,
            max_delay: Duration::from_secs(initial.max(max)),
            max_retries,
        },
    )
}

proptest! {
    /// Delays never shrink and never exceed the ceiling.
    #[test]
    fn prop_delays_are_monotonic_and_capped(policy in policy_strategy()) {
        let delays: Vec<Duration> = (1..=40).map_while(|n| policy.delay_for(n)).collect();

        for pair in delays.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for delay in &delays {
            prop_assert!(*delay <= policy.max_delay);
        }
    }

    /// A bounded policy yields exactly `max_retries` delays.
    #[test]
    fn prop_budget_is_respected(policy in policy_strategy()) {
        let count = (1..=40).map_while(|n| policy.delay_for(n)).count();

        match policy.max_retries {
            Some(max) => prop_assert_eq!(count, max as usize),
            None => prop_assert_eq!(count, 40),
        }
    }

    /// The first retry always waits exactly the initial delay.
    #[test]
    fn prop_first_retry_uses_initial_delay(policy in policy_strategy()) {
        prop_assume!(policy.max_retries != Some(0));
        prop_assert_eq!(policy.delay_for(1), Some(policy.initial_delay));
    }
}
