//! Deterministic simulation harness for Staybook sync testing.
//!
//! Scripted implementations of the Environment, Transport and TokenSource
//! traits, so sync procedures can be driven step by step on a paused tokio
//! clock.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! state invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod recorders;
pub mod scenario;
pub mod sim_env;
pub mod sim_transport;
pub mod tokens;

pub use invariants::{
    Invariant, InvariantResult, InvariantRegistry, LoadingMatchesInFlight, RoomsAreValid,
    StateSnapshot, Violation,
};
pub use recorders::{RecordingNavigator, RecordingNotifier};
pub use scenario::{Scenario, settle};
pub use sim_env::SimEnv;
pub use sim_transport::{Reply, ScriptedTransport};
pub use tokens::ScriptedTokens;
