//! Application configuration.

use staybook_client::RetryPolicy;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY: &str = "$";

/// Process-wide configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Currency symbol shown next to prices.
    pub currency: String,
    /// Base endpoint of the booking backend. `None` leaves the transport
    /// without a target; every request then fails.
    pub backend_url: Option<String>,
    /// Retry schedule for profile logical failures.
    pub profile_retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
            backend_url: None,
            profile_retry: RetryPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from raw settings.
    ///
    /// Empty strings count as unset.
    pub fn new(currency: Option<String>, backend_url: Option<String>) -> Self {
        Self {
            currency: non_empty(currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
            backend_url: non_empty(backend_url),
            ..Self::default()
        }
    }

    /// Replace the profile retry schedule.
    #[must_use]
    pub fn with_profile_retry(mut self, policy: RetryPolicy) -> Self {
        self.profile_retry = policy;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
