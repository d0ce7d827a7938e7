//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - Sync results translated from the client by [`crate::Bridge`].
//! - Direct writes by consumers through the [`crate::AppContext`] setters.

use staybook_core::Room;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A rooms sync began.
    RoomsSyncStarted,

    /// A rooms sync produced a validated catalog.
    RoomsLoaded {
        /// Accepted rooms, in server order.
        rooms: Vec<Room>,
    },

    /// A rooms sync failed; the catalog is cleared.
    RoomsFailed {
        /// User-visible failure message.
        message: String,
    },

    /// A rooms sync ended, whatever its outcome.
    RoomsSyncFinished,

    /// The user profile was fetched successfully.
    ProfileLoaded {
        /// Role is `hotelOwner`.
        is_owner: bool,
        /// Recently searched cities.
        searched_cities: Vec<String>,
    },

    /// The user profile could not be fetched at the transport level.
    ProfileFailed {
        /// User-visible failure message.
        message: String,
    },

    /// The identity provider no longer reports a signed-in user.
    SignedOut,

    /// Consumer overwrote the owner flag.
    OwnerSet(bool),

    /// Consumer toggled the hotel registration dialog.
    HotelRegistrationShown(bool),

    /// Consumer overwrote the searched cities.
    SearchedCitiesSet(Vec<String>),

    /// Consumer overwrote the room catalog.
    RoomsSet(Vec<Room>),
}
