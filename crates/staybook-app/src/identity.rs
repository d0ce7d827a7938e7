//! Identity presence state machine.
//!
//! The identity provider reports the current signed-in subject (or none)
//! whenever it changes. [`IdentityTracker`] turns those reports into explicit
//! edges so the runtime starts exactly one profile sync per sign-in, and
//! cancels the chain belonging to a previous identity.

use staybook_client::Identity;

/// Edge between two identity observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityTransition {
    /// Same identity (or still none); nothing to do.
    Unchanged,
    /// No identity → identity present.
    SignedIn(Identity),
    /// Identity present → a different identity.
    Switched {
        /// Identity that was replaced.
        from: Identity,
        /// Newly signed-in identity.
        to: Identity,
    },
    /// Identity present → none.
    SignedOut(Identity),
}

impl IdentityTransition {
    /// Whether this edge should start a profile sync.
    pub fn starts_profile_sync(&self) -> bool {
        matches!(self, Self::SignedIn(_) | Self::Switched { .. })
    }

    /// Whether this edge invalidates the previous identity's profile chain.
    pub fn ends_profile_sync(&self) -> bool {
        matches!(self, Self::Switched { .. } | Self::SignedOut(_))
    }
}

/// Tracks the last identity reported by the provider.
///
/// Every edge other than [`IdentityTransition::Unchanged`] bumps the
/// generation. A profile result fetched under an older generation belongs to
/// an identity that is no longer current.
#[derive(Debug, Clone, Default)]
pub struct IdentityTracker {
    current: Option<Identity>,
    generation: u64,
}

impl IdentityTracker {
    /// Tracker with no identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new observation and classify the edge.
    pub fn observe(&mut self, next: Option<Identity>) -> IdentityTransition {
        let previous = std::mem::replace(&mut self.current, next.clone());

        let transition = match (previous, next) {
            (None, None) => IdentityTransition::Unchanged,
            (None, Some(to)) => IdentityTransition::SignedIn(to),
            (Some(from), None) => IdentityTransition::SignedOut(from),
            (Some(from), Some(to)) if from == to => IdentityTransition::Unchanged,
            (Some(from), Some(to)) => IdentityTransition::Switched { from, to },
        };

        if transition != IdentityTransition::Unchanged {
            self.generation = self.generation.wrapping_add(1);
        }
        transition
    }

    /// Number of identity edges observed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Currently signed-in identity.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }
}
