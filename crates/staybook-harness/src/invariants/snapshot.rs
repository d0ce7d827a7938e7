//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state at a point in time. Invariants
//! operate on snapshots rather than live state to ensure consistent checks.

use staybook_app::AppState;

/// Application state plus what the test driver knows about in-flight work.
#[derive(Debug, Clone, Default)]
pub struct StateSnapshot {
    /// Published application state.
    pub state: AppState,
    /// Rooms syncs started but not finished, when the driver tracks them.
    /// `None` skips checks that depend on it.
    pub rooms_in_flight: Option<usize>,
}

impl StateSnapshot {
    /// Snapshot taken with no sync in flight.
    pub fn settled(state: AppState) -> Self {
        Self { state, rooms_in_flight: Some(0) }
    }

    /// Snapshot with a known number of in-flight rooms syncs.
    pub fn with_in_flight(state: AppState, rooms_in_flight: usize) -> Self {
        Self { state, rooms_in_flight: Some(rooms_in_flight) }
    }
}
