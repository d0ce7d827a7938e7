//! Staybook core
//!
//! Domain types shared by the sync client and the application layer. Nothing
//! in this crate performs I/O: responses arrive as [`serde_json::Value`] and
//! leave as validated, strongly-typed values.
//!
//! # Components
//!
//! - [`Room`]: validated catalog entry (non-empty id, embedded hotel record)
//! - [`RoomBatch`]: result of filtering a raw room listing
//! - [`Envelope`]: the `{ success, message, ... }` response wrapper
//! - [`UserProfile`]: role and search history derived from the user resource
//! - [`env::Environment`]: clock abstraction for deterministic testing

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod env;
mod envelope;
mod error;
mod profile;
mod room;

pub use envelope::{Envelope, RoomsResponse, UserResponse};
pub use error::RoomRejection;
pub use profile::{HOTEL_OWNER_ROLE, UserProfile};
pub use room::{RejectedRoom, Room, RoomBatch};
