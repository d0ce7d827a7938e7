//! Consumer-facing application context.
//!
//! One [`AppContext`] is created at startup and cloned into every consumer.
//! Clones share the same store, so a write through one clone is visible to
//! every observer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use staybook_client::{Identity, SyncClient, TokenSource, Transport};
use staybook_core::{Room, env::Environment};
use tokio::sync::watch;

use crate::{
    AppAction, AppConfig, AppEvent, AppState, Bridge, IdentityTracker, IdentityTransition,
    Navigator, ProfileStep, Services, Store,
};

/// Shared state container plus the sync procedures that feed it.
pub struct AppContext<E: Environment> {
    inner: Arc<Inner<E>>,
}

struct Inner<E: Environment> {
    config: AppConfig,
    env: E,
    store: Store,
    bridge: Bridge,
    services: Services,
    identity: Mutex<IdentityTracker>,
}

impl<E: Environment> Clone for AppContext<E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E: Environment> AppContext<E> {
    /// Create a context with default-empty state.
    pub fn new(config: AppConfig, env: E, services: Services) -> Self {
        let client = SyncClient::new(Arc::clone(&services.transport));
        let bridge = Bridge::new(client, Arc::clone(&services.tokens));

        Self {
            inner: Arc::new(Inner {
                config,
                env,
                store: Store::new(),
                bridge,
                services,
                identity: Mutex::new(IdentityTracker::new()),
            }),
        }
    }

    /// Snapshot of every field.
    pub fn state(&self) -> AppState {
        self.inner.store.snapshot()
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.store.subscribe()
    }

    /// Overwrite the owner flag.
    pub fn set_is_owner(&self, is_owner: bool) {
        self.dispatch(AppEvent::OwnerSet(is_owner));
    }

    /// Show or hide the hotel registration dialog.
    pub fn set_show_hotel_registration(&self, show: bool) {
        self.dispatch(AppEvent::HotelRegistrationShown(show));
    }

    /// Overwrite the searched cities.
    pub fn set_searched_cities(&self, cities: Vec<String>) {
        self.dispatch(AppEvent::SearchedCitiesSet(cities));
    }

    /// Overwrite the room catalog. Not validated.
    pub fn set_rooms(&self, rooms: Vec<Room>) {
        self.dispatch(AppEvent::RoomsSet(rooms));
    }

    /// Configured currency symbol.
    pub fn currency(&self) -> &str {
        &self.inner.config.currency
    }

    /// Resolved configuration.
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Navigation capability.
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.inner.services.navigator
    }

    /// Backend transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.inner.services.transport
    }

    /// Bearer token issuer.
    pub fn token_source(&self) -> &Arc<dyn TokenSource> {
        &self.inner.services.tokens
    }

    /// Currently signed-in identity, as last recorded.
    pub fn identity(&self) -> Option<Identity> {
        self.identity_tracker().current().cloned()
    }

    /// Record the identity provider's current report.
    ///
    /// Only bookkeeping: nothing is started or cancelled here. Profile
    /// results fetched for a replaced identity are discarded from now on.
    /// Drivers that own background tasks should go through
    /// [`crate::Runtime::identity_changed`] instead.
    pub fn record_identity(&self, identity: Option<Identity>) -> IdentityTransition {
        self.identity_tracker().observe(identity)
    }

    /// Refresh the room catalog.
    ///
    /// `loading` is set for the whole call and cleared on every exit path,
    /// including cancellation of the surrounding task.
    pub async fn sync_rooms(&self) {
        let started = self.inner.env.now();
        let _loading = LoadingGuard::begin(self);

        for event in self.inner.bridge.sync_rooms().await {
            self.dispatch(event);
        }

        tracing::debug!(
            elapsed_ms = self.inner.env.elapsed_since(started).as_millis() as u64,
            "rooms sync finished"
        );
    }

    /// Refresh the signed-in user's profile.
    ///
    /// Logical failures are retried on the configured [`crate::AppConfig`]
    /// schedule without touching state. Transport failures notify the user
    /// and end the chain. The chain belongs to the identity recorded when it
    /// starts; once that identity is replaced its result is dropped.
    pub async fn sync_user_profile(&self) {
        self.sync_user_profile_for(self.identity_generation()).await;
    }

    pub(crate) fn identity_generation(&self) -> u64 {
        self.identity_tracker().generation()
    }

    pub(crate) async fn sync_user_profile_for(&self, generation: u64) {
        let policy = &self.inner.config.profile_retry;
        let mut retry: u32 = 0;

        loop {
            match self.inner.bridge.sync_profile().await {
                ProfileStep::Settled(events) => {
                    self.dispatch_for_generation(generation, events);
                    return;
                },
                ProfileStep::Rejected { message } => {
                    retry = retry.saturating_add(1);

                    let Some(delay) = policy.delay_for(retry) else {
                        tracing::warn!(
                            retries = retry - 1,
                            message = message.as_deref(),
                            "failed to fetch user data, giving up"
                        );
                        return;
                    };

                    tracing::warn!(
                        retry,
                        delay_ms = delay.as_millis() as u64,
                        message = message.as_deref(),
                        "failed to fetch user data, retrying"
                    );
                    self.inner.env.sleep(delay).await;

                    if self.identity_generation() != generation {
                        tracing::debug!(generation, "identity changed during retry delay, stopping");
                        return;
                    }
                },
            }
        }
    }

    pub(crate) fn dispatch(&self, event: AppEvent) {
        let actions = self.inner.store.dispatch(event);
        self.perform(actions);
    }

    /// Apply `events` only if no identity edge happened since `generation`.
    ///
    /// The identity lock is held across the check and the store update, so a
    /// concurrent [`Self::record_identity`] lands either before (and the
    /// events are dropped) or after (and its own follow-up events win).
    fn dispatch_for_generation(&self, generation: u64, events: Vec<AppEvent>) {
        let mut actions = Vec::new();
        {
            let tracker = self.identity_tracker();
            if tracker.generation() != generation {
                tracing::debug!(
                    generation,
                    current = tracker.generation(),
                    "dropping stale profile result"
                );
                return;
            }
            for event in events {
                actions.extend(self.inner.store.dispatch(event));
            }
        }

        // Collaborators run outside the identity lock
        self.perform(actions);
    }

    fn perform(&self, actions: Vec<AppAction>) {
        for action in actions {
            match action {
                // Published by the store
                AppAction::Render => {},
                AppAction::Notify { message } => self.inner.services.notifier.error(&message),
            }
        }
    }

    fn identity_tracker(&self) -> MutexGuard<'_, IdentityTracker> {
        self.inner.identity.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Environment> std::fmt::Debug for AppContext<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.inner.config)
            .field("state", &self.inner.store.snapshot())
            .finish_non_exhaustive()
    }
}

/// Marks a rooms sync in flight for as long as it lives.
struct LoadingGuard<'a, E: Environment> {
    context: &'a AppContext<E>,
}

impl<'a, E: Environment> LoadingGuard<'a, E> {
    fn begin(context: &'a AppContext<E>) -> Self {
        context.dispatch(AppEvent::RoomsSyncStarted);
        Self { context }
    }
}

impl<E: Environment> Drop for LoadingGuard<'_, E> {
    fn drop(&mut self) {
        self.context.dispatch(AppEvent::RoomsSyncFinished);
    }
}
