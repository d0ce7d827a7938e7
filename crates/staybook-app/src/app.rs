//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the shared
//! application state completely decoupled from I/O and the backend protocol.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the caller to execute.
//!
//! # Responsibilities
//!
//! - Replaces the room catalog wholesale on each sync, clearing it on failure.
//! - Tracks the in-flight `loading` flag for rooms syncs.
//! - Holds profile-derived facts (owner flag, search history).
//! - Accepts direct overwrites from consumers without validation.

use staybook_core::Room;

use crate::{AppAction, AppEvent, AppState};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a runtime.
#[derive(Debug, Clone, Default)]
pub struct App {
    state: AppState,
    /// Rooms syncs started but not yet finished. `loading` mirrors `> 0`.
    rooms_in_flight: usize,
}

impl App {
    /// Create an App with default-empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::RoomsSyncStarted => {
                self.rooms_in_flight += 1;
                self.state.loading = true;
                vec![AppAction::Render]
            },
            AppEvent::RoomsLoaded { rooms } | AppEvent::RoomsSet(rooms) => {
                self.state.rooms = rooms;
                vec![AppAction::Render]
            },
            AppEvent::RoomsFailed { message } => {
                self.state.rooms.clear();
                vec![AppAction::Notify { message }, AppAction::Render]
            },
            AppEvent::RoomsSyncFinished => {
                self.rooms_in_flight = self.rooms_in_flight.saturating_sub(1);
                self.state.loading = self.rooms_in_flight > 0;
                vec![AppAction::Render]
            },
            AppEvent::ProfileLoaded { is_owner, searched_cities } => {
                self.state.is_owner = is_owner;
                self.state.searched_cities = searched_cities;
                vec![AppAction::Render]
            },
            AppEvent::ProfileFailed { message } => vec![AppAction::Notify { message }],
            AppEvent::SignedOut => {
                self.state.is_owner = false;
                self.state.searched_cities.clear();
                vec![AppAction::Render]
            },
            AppEvent::OwnerSet(is_owner) => {
                self.state.is_owner = is_owner;
                vec![AppAction::Render]
            },
            AppEvent::HotelRegistrationShown(show) => {
                self.state.show_hotel_registration = show;
                vec![AppAction::Render]
            },
            AppEvent::SearchedCitiesSet(cities) => {
                self.state.searched_cities = cities;
                vec![AppAction::Render]
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Room catalog.
    pub fn rooms(&self) -> &[Room] {
        &self.state.rooms
    }

    /// A rooms sync is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }
}
