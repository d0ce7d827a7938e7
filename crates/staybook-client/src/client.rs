//! Sync client.
//!
//! [`SyncClient`] issues the two backend requests the application depends on
//! and classifies each response into an outcome. Filtering of the room
//! listing happens here, so no invalid room ever leaves this crate.

use std::sync::Arc;

use staybook_core::{RoomBatch, RoomsResponse, UserResponse};

use crate::{ClientError, ProfileOutcome, Request, RoomsOutcome, TokenSource, Transport};

/// Room listing resource. Unauthenticated.
pub const ROOMS_PATH: &str = "/api/rooms";

/// Signed-in user resource. Requires a bearer token.
pub const USER_PATH: &str = "/api/user";

/// Client for the booking backend's catalog and profile resources.
#[derive(Clone)]
pub struct SyncClient {
    transport: Arc<dyn Transport>,
}

impl SyncClient {
    /// Create a client over `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch and validate the room catalog.
    pub async fn fetch_rooms(&self) -> RoomsOutcome {
        let body = match self.transport.get(Request::get(ROOMS_PATH)).await {
            Ok(body) => body,
            Err(err) => return RoomsOutcome::Failed(err.into()),
        };

        match RoomsResponse::from_value(body) {
            RoomsResponse::Listing(entries) => RoomsOutcome::Loaded(RoomBatch::filter(entries)),
            RoomsResponse::Rejected { message } => RoomsOutcome::Rejected { message },
            RoomsResponse::Malformed { message } => RoomsOutcome::Malformed { message },
        }
    }

    /// Fetch the signed-in user's profile.
    ///
    /// A token failure is reported like a transport failure: no request is
    /// sent and the outcome is terminal.
    pub async fn fetch_profile(&self, tokens: &dyn TokenSource) -> ProfileOutcome {
        let token = match tokens.token().await {
            Ok(token) => token,
            Err(err) => return ProfileOutcome::Failed(err.into()),
        };

        let request = Request::get(USER_PATH).with_bearer(token);
        let body = match self.transport.get(request).await {
            Ok(body) => body,
            Err(err) => return ProfileOutcome::Failed(ClientError::from(err)),
        };

        match UserResponse::from_value(body) {
            UserResponse::Profile(profile) => ProfileOutcome::Loaded(profile),
            UserResponse::Rejected { message } => ProfileOutcome::Rejected { message },
        }
    }
}

impl std::fmt::Debug for SyncClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncClient").finish_non_exhaustive()
    }
}

