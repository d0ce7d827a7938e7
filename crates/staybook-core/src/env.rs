//! Environment abstraction for deterministic testing.
//!
//! Decouples sync logic from wall-clock time. Production uses the system
//! clock and tokio timers; tests substitute a virtual clock so retry delays
//! can be stepped through without actually waiting.

use std::time::Duration;

/// Abstract environment providing time and async sleeping.
///
/// # Invariants
///
/// Implementations MUST guarantee:
///
/// - `now()` never goes backwards
/// - `sleep()` completes no earlier than `duration` after it was created,
///   measured on the same clock as `now()`
pub trait Environment: Clone + Send + Sync + 'static {
    /// The specific instant type used by this environment.
    ///
    /// Production environments use `std::time::Instant`, while simulation
    /// environments use virtual time (e.g., `tokio::time::Instant` with a
    /// paused clock).
    type Instant: Copy + Ord + Send + Sync + std::ops::Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Sleeps for the specified duration.
    ///
    /// This is the only suspension point the sync layer introduces on its
    /// own; everything else waits on the transport or the token issuer.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;

    /// Time elapsed since `earlier`.
    ///
    /// Saturates to zero if `earlier` is in the future, which can only happen
    /// when the caller mixes instants from different environments.
    fn elapsed_since(&self, earlier: Self::Instant) -> Duration {
        let now = self.now();
        if now >= earlier { now - earlier } else { Duration::ZERO }
    }
}
