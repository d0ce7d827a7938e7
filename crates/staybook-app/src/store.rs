//! Observable state store.
//!
//! Wraps the [`App`] state machine and publishes a fresh [`AppState`]
//! snapshot on a `tokio::sync::watch` channel whenever an event produces
//! [`AppAction::Render`]. Observers see the latest state; intermediate
//! snapshots may be coalesced if an observer falls behind.

use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;

use crate::{App, AppAction, AppEvent, AppState};

/// Shared, observable application state.
#[derive(Debug)]
pub struct Store {
    app: Mutex<App>,
    published: watch::Sender<AppState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store with default-empty state.
    pub fn new() -> Self {
        let app = App::new();
        let (published, _) = watch::channel(app.state().clone());
        Self { app: Mutex::new(app), published }
    }

    /// Apply an event.
    ///
    /// `Render` is executed here by publishing a snapshot; all actions are
    /// still returned so the caller can execute the rest.
    pub fn dispatch(&self, event: AppEvent) -> Vec<AppAction> {
        let mut app = self.app.lock().unwrap_or_else(PoisonError::into_inner);
        let actions = app.handle(event);

        if actions.contains(&AppAction::Render) {
            self.published.send_replace(app.state().clone());
        }

        actions
    }

    /// Latest published state.
    pub fn snapshot(&self) -> AppState {
        self.published.borrow().clone()
    }

    /// Observe state changes.
    ///
    /// The receiver starts with the current state marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.published.subscribe()
    }
}
