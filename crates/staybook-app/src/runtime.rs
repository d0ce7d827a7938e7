//! Task lifecycle for background syncs.
//!
//! The [`Runtime`] owns every sync task it spawns. Profile chains belong to
//! one identity: when that identity changes or signs out, the chain (and any
//! retry timer it is sleeping on) is aborted before anything else happens.
//!
//! All methods that spawn must be called from within a tokio runtime.

use staybook_client::Identity;
use staybook_core::env::Environment;
use tokio::task::{AbortHandle, JoinHandle};

use crate::{AppContext, AppEvent, IdentityTransition};

/// Owner of background sync tasks.
pub struct Runtime<E: Environment> {
    context: AppContext<E>,
    started: bool,
    rooms_tasks: Vec<AbortHandle>,
    profile_task: Option<AbortHandle>,
}

impl<E: Environment> Runtime<E> {
    /// Create a runtime over `context`. Nothing runs until [`Self::start`].
    pub fn new(context: AppContext<E>) -> Self {
        Self { context, started: false, rooms_tasks: Vec::new(), profile_task: None }
    }

    /// Shared context driven by this runtime.
    pub fn context(&self) -> &AppContext<E> {
        &self.context
    }

    /// Run the startup rooms sync. Subsequent calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        tracing::debug!("starting initial rooms sync");
        drop(self.refresh_rooms());
    }

    /// Spawn a rooms sync.
    ///
    /// The handle may be awaited or dropped; the runtime keeps its own abort
    /// handle either way.
    pub fn refresh_rooms(&mut self) -> JoinHandle<()> {
        self.rooms_tasks.retain(|task| !task.is_finished());

        let context = self.context.clone();
        let handle = tokio::spawn(async move { context.sync_rooms().await });
        self.rooms_tasks.push(handle.abort_handle());
        handle
    }

    /// Feed the identity provider's current report.
    ///
    /// The previous identity's chain is aborted and its generation retired,
    /// so a result it has already fetched is never applied.
    pub fn identity_changed(&mut self, identity: Option<Identity>) -> IdentityTransition {
        let transition = self.context.record_identity(identity);
        tracing::debug!(?transition, "identity report");

        if transition.ends_profile_sync() {
            self.cancel_profile_sync();
        }
        if matches!(transition, IdentityTransition::SignedOut(_)) {
            self.context.dispatch(AppEvent::SignedOut);
        }
        if transition.starts_profile_sync() {
            self.spawn_profile_sync();
        }

        transition
    }

    /// A profile chain is running or waiting on a retry.
    pub fn has_pending_profile_sync(&self) -> bool {
        self.profile_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Abort every outstanding task.
    pub fn shutdown(&mut self) {
        self.cancel_profile_sync();

        for task in self.rooms_tasks.drain(..) {
            task.abort();
        }
    }

    fn spawn_profile_sync(&mut self) {
        let context = self.context.clone();
        let generation = context.identity_generation();
        let handle = tokio::spawn(async move { context.sync_user_profile_for(generation).await });
        self.profile_task = Some(handle.abort_handle());
    }

    fn cancel_profile_sync(&mut self) {
        if let Some(task) = self.profile_task.take() {
            if !task.is_finished() {
                tracing::debug!("aborting pending profile sync");
            }
            task.abort();
        }
    }
}

impl<E: Environment> Drop for Runtime<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<E: Environment> std::fmt::Debug for Runtime<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("started", &self.started)
            .field("rooms_tasks", &self.rooms_tasks.len())
            .field("profile_pending", &self.has_pending_profile_sync())
            .finish_non_exhaustive()
    }
}
