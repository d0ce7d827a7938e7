//! Virtual-clock Environment.
//!
//! `SimEnv` reads `tokio::time::Instant`, so under a paused runtime
//! (`#[tokio::test(start_paused = true)]`) time only moves when the test calls
//! `tokio::time::advance` or the runtime auto-advances while idle. Every
//! requested sleep is recorded, which lets tests assert the exact retry
//! schedule.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use staybook_core::env::Environment;

/// Simulated environment backed by the tokio clock.
#[derive(Debug, Clone, Default)]
pub struct SimEnv {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl SimEnv {
    /// Create a new simulated environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Environment for SimEnv {
    type Instant = tokio::time::Instant;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        self.sleeps.lock().unwrap_or_else(PoisonError::into_inner).push(duration);
        tokio::time::sleep(duration)
    }
}
