//! Observable application state.
//!
//! [`AppState`] is the snapshot every consumer reads. It holds only derived
//! facts: the raw profile and envelopes never reach it.

use serde::Serialize;
use staybook_core::Room;

/// Snapshot of the shared application state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Signed-in user owns a hotel.
    pub is_owner: bool,
    /// Hotel registration dialog is open. UI-driven only.
    pub show_hotel_registration: bool,
    /// Recently searched cities of the signed-in user.
    pub searched_cities: Vec<String>,
    /// Room catalog in server order. Every entry is valid.
    pub rooms: Vec<Room>,
    /// A rooms sync is in flight.
    pub loading: bool,
}
