//! Application side-effects.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the caller to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// State changed; publish a new snapshot to observers.
    Render,

    /// Show a failure notification to the user.
    Notify {
        /// User-visible message.
        message: String,
    },
}
