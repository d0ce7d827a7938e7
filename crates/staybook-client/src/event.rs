//! Sync outcomes.
//!
//! Each fetch resolves to exactly one outcome. The caller decides how an
//! outcome maps onto application state; the client only classifies.

use staybook_core::{RoomBatch, UserProfile};

use crate::ClientError;

/// Result of one room listing fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomsOutcome {
    /// Well-formed listing, filtered to valid rooms.
    Loaded(RoomBatch),

    /// Envelope reported `success: false`.
    Rejected {
        /// Server-supplied message.
        message: Option<String>,
    },

    /// Envelope reported success but carried no room array.
    Malformed {
        /// Server-supplied message.
        message: Option<String>,
    },

    /// No envelope could be read.
    Failed(ClientError),
}

impl RoomsOutcome {
    /// Message to show the user when this outcome is a failure.
    ///
    /// Falls back to `fallback` when the server gave no message.
    pub fn failure_message(&self, fallback: &str) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::Rejected { message } | Self::Malformed { message } => {
                Some(message.clone().unwrap_or_else(|| fallback.to_owned()))
            },
            Self::Failed(err) => Some(err.user_message()),
        }
    }
}

/// Result of one user profile fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// Envelope reported success.
    Loaded(UserProfile),

    /// Envelope reported `success: false`. Eligible for retry.
    Rejected {
        /// Server-supplied message.
        message: Option<String>,
    },

    /// No envelope could be read. Terminal for the current sync.
    Failed(ClientError),
}
