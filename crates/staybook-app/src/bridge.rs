//! Client-to-Application translation layer.
//!
//! The [`Bridge`] wraps the [`staybook_client::SyncClient`] and adapts its
//! outcomes to the application lifecycle.
//!
//! # Responsibilities
//!
//! - Issues the rooms and profile fetches, attaching the bearer token source.
//! - Logs every outcome with the diagnostics operators need.
//! - Converts outcomes into [`crate::AppEvent`]s, choosing user-visible
//!   messages with the generic fallbacks when the server gave none.
//! - Leaves retry decisions to the caller: a profile logical failure comes
//!   back as [`ProfileStep::Rejected`] instead of an event.

use std::sync::Arc;

use staybook_client::{ProfileOutcome, RoomsOutcome, SyncClient, TokenSource};

use crate::AppEvent;

/// Shown when a rooms sync fails without a server message.
pub const ROOMS_FAILURE_FALLBACK: &str = "Failed to load rooms";

/// Shown when a profile sync fails without a usable message.
pub const PROFILE_FAILURE_FALLBACK: &str = "Failed to load user data";

/// Result of one profile attempt, from the application's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileStep {
    /// The attempt is final; apply these events.
    Settled(Vec<AppEvent>),
    /// The backend refused this attempt; state is untouched.
    Rejected {
        /// Server-supplied message.
        message: Option<String>,
    },
}

/// Bridge between the sync client and the App.
#[derive(Clone)]
pub struct Bridge {
    client: SyncClient,
    tokens: Arc<dyn TokenSource>,
}

impl Bridge {
    /// Create a bridge over `client`, authenticating with `tokens`.
    pub fn new(client: SyncClient, tokens: Arc<dyn TokenSource>) -> Self {
        Self { client, tokens }
    }

    /// Fetch the room catalog and return resulting App events.
    pub async fn sync_rooms(&self) -> Vec<AppEvent> {
        let outcome = self.client.fetch_rooms().await;
        Self::rooms_events(outcome)
    }

    /// Fetch the user profile once.
    pub async fn sync_profile(&self) -> ProfileStep {
        let outcome = self.client.fetch_profile(self.tokens.as_ref()).await;
        Self::profile_step(outcome)
    }

    /// Translate a rooms outcome.
    pub fn rooms_events(outcome: RoomsOutcome) -> Vec<AppEvent> {
        let message = outcome.failure_message(ROOMS_FAILURE_FALLBACK);

        match (outcome, message) {
            (RoomsOutcome::Loaded(batch), _) => {
                tracing::info!(
                    count = batch.rooms.len(),
                    rejected = batch.rejected.len(),
                    "loaded valid rooms"
                );
                vec![AppEvent::RoomsLoaded { rooms: batch.rooms }]
            },
            (RoomsOutcome::Failed(err), message) => {
                tracing::error!(error = %err, transient = err.is_transient(), "error fetching rooms");
                vec![AppEvent::RoomsFailed { message: non_empty(message, ROOMS_FAILURE_FALLBACK) }]
            },
            (outcome @ (RoomsOutcome::Rejected { .. } | RoomsOutcome::Malformed { .. }), message) => {
                tracing::error!(?outcome, "invalid rooms data received");
                vec![AppEvent::RoomsFailed { message: non_empty(message, ROOMS_FAILURE_FALLBACK) }]
            },
        }
    }

    /// Translate a profile outcome.
    pub fn profile_step(outcome: ProfileOutcome) -> ProfileStep {
        match outcome {
            ProfileOutcome::Loaded(profile) => {
                let is_owner = profile.is_owner();
                tracing::info!(
                    is_owner,
                    searched_cities = profile.recent_searched_cities.len(),
                    "loaded user profile"
                );
                ProfileStep::Settled(vec![AppEvent::ProfileLoaded {
                    is_owner,
                    searched_cities: profile.recent_searched_cities,
                }])
            },
            ProfileOutcome::Rejected { message } => ProfileStep::Rejected { message },
            ProfileOutcome::Failed(err) => {
                tracing::error!(error = %err, transient = err.is_transient(), "error fetching user");
                let message = non_empty(Some(err.user_message()), PROFILE_FAILURE_FALLBACK);
                ProfileStep::Settled(vec![AppEvent::ProfileFailed { message }])
            },
        }
    }
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge").field("client", &self.client).finish_non_exhaustive()
    }
}

fn non_empty(message: Option<String>, fallback: &str) -> String {
    message.filter(|m| !m.is_empty()).unwrap_or_else(|| fallback.to_owned())
}
