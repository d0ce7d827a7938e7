//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use staybook_core::Room;

use super::{Invariant, InvariantResult, StateSnapshot, Violation};

/// Every catalog entry must pass room validation.
///
/// Each room is serialized back to JSON and re-validated. Catches any path
/// that admits a room without an id or without a hotel object.
pub struct RoomsAreValid;

impl Invariant for RoomsAreValid {
    fn name(&self) -> &'static str {
        "rooms_are_valid"
    }

    fn check(&self, snapshot: &StateSnapshot) -> InvariantResult {
        for (index, room) in snapshot.state.rooms.iter().enumerate() {
            let revalidated = serde_json::to_value(room)
                .map_err(|err| err.to_string())
                .and_then(|value| Room::try_from(value).map_err(|reason| reason.to_string()));

            if let Err(reason) = revalidated {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("room {index} ({:?}) fails validation: {reason}", room.id()),
                });
            }
        }
        Ok(())
    }
}

/// `loading` must be true exactly while a rooms sync is in flight.
pub struct LoadingMatchesInFlight;

impl Invariant for LoadingMatchesInFlight {
    fn name(&self) -> &'static str {
        "loading_matches_in_flight"
    }

    fn check(&self, snapshot: &StateSnapshot) -> InvariantResult {
        let Some(in_flight) = snapshot.rooms_in_flight else {
            return Ok(());
        };

        if snapshot.state.loading != (in_flight > 0) {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "loading = {} with {in_flight} rooms sync(s) in flight",
                    snapshot.state.loading
                ),
            });
        }
        Ok(())
    }
}
