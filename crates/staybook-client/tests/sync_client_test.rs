//! Tests for `SyncClient` response classification.
//!
//! A canned transport returns fixed bodies so each test pins one branch of
//! the fetch-and-validate protocol: transport failure, logical failure,
//! malformed envelope, and success with per-element filtering.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use staybook_client::{
    ClientError, ProfileOutcome, ROOMS_PATH, Request, RoomsOutcome, StaticToken, SyncClient,
    TokenError, Transport, TransportError, USER_PATH,
};
use staybook_core::RoomRejection;

/// Transport that answers every request with the same result and records
/// what it was asked.
struct CannedTransport {
    response: Result<Value, TransportError>,
    requests: Mutex<Vec<Request>>,
}

impl CannedTransport {
    fn new(response: Result<Value, TransportError>) -> Arc<Self> {
        Arc::new(Self { response, requests: Mutex::new(Vec::new()) })
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get(&self, request: Request) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.response.clone()
    }
}

fn client(transport: &Arc<CannedTransport>) -> SyncClient {
    SyncClient::new(transport.clone())
}

#[tokio::test]
async fn rooms_request_is_unauthenticated() {
    let transport = CannedTransport::new(Ok(json!({ "success": true, "rooms": [] })));
    let _ = client(&transport).fetch_rooms().await;

    assert_eq!(transport.requests(), vec![Request::get(ROOMS_PATH)]);
}

#[tokio::test]
async fn rooms_listing_is_filtered_per_element() {
    let transport = CannedTransport::new(Ok(json!({
        "success": true,
        "rooms": [{ "id": "1", "hotel": {} }, null, { "id": "2" }, { "hotel": {} }],
    })));

    let RoomsOutcome::Loaded(batch) = client(&transport).fetch_rooms().await else {
        panic!("expected a loaded batch");
    };

    assert_eq!(batch.rooms.len(), 1);
    assert_eq!(batch.rooms[0].id(), "1");
    let reasons: Vec<RoomRejection> = batch.rejected.iter().map(|r| r.reason).collect();
    assert_eq!(reasons, vec![
        RoomRejection::Missing,
        RoomRejection::MissingHotel,
        RoomRejection::MissingId
    ]);
}

#[tokio::test]
async fn rooms_logical_failure_uses_server_message() {
    let transport =
        CannedTransport::new(Ok(json!({ "success": false, "message": "Maintenance" })));
    let outcome = client(&transport).fetch_rooms().await;

    assert_eq!(outcome, RoomsOutcome::Rejected { message: Some("Maintenance".into()) });
    assert_eq!(outcome.failure_message("Failed to load rooms").as_deref(), Some("Maintenance"));
}

#[tokio::test]
async fn rooms_without_array_is_malformed() {
    let transport = CannedTransport::new(Ok(json!({ "success": true, "rooms": "none" })));
    let outcome = client(&transport).fetch_rooms().await;

    assert_eq!(outcome, RoomsOutcome::Malformed { message: None });
    assert_eq!(
        outcome.failure_message("Failed to load rooms").as_deref(),
        Some("Failed to load rooms")
    );
}

#[tokio::test]
async fn rooms_transport_failure_is_reported() {
    let transport = CannedTransport::new(Err(TransportError::Request("connection refused".into())));
    let outcome = client(&transport).fetch_rooms().await;

    assert_eq!(
        outcome,
        RoomsOutcome::Failed(ClientError::Transport(TransportError::Request(
            "connection refused".into()
        )))
    );
    assert_eq!(
        outcome.failure_message("Failed to load rooms").as_deref(),
        Some("request failed: connection refused")
    );
}

#[tokio::test]
async fn profile_request_carries_bearer_token() {
    let transport = CannedTransport::new(Ok(json!({ "success": true, "role": "user" })));
    let _ = client(&transport).fetch_profile(&StaticToken::new("tok-42")).await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, USER_PATH);
    assert_eq!(requests[0].authorization().as_deref(), Some("Bearer tok-42"));
}

#[tokio::test]
async fn profile_success_yields_owner_and_cities() {
    let transport = CannedTransport::new(Ok(json!({
        "success": true,
        "role": "hotelOwner",
        "recentSearchedCities": ["Paris"],
    })));

    let ProfileOutcome::Loaded(profile) =
        client(&transport).fetch_profile(&StaticToken::new("t")).await
    else {
        panic!("expected a loaded profile");
    };

    assert!(profile.is_owner());
    assert_eq!(profile.recent_searched_cities, vec!["Paris".to_owned()]);
}

#[tokio::test]
async fn profile_logical_failure_is_rejected() {
    let transport = CannedTransport::new(Ok(json!({ "success": false })));
    let outcome = client(&transport).fetch_profile(&StaticToken::new("t")).await;

    assert_eq!(outcome, ProfileOutcome::Rejected { message: None });
}

#[tokio::test]
async fn missing_token_skips_the_request() {
    let transport = CannedTransport::new(Ok(json!({ "success": true })));
    let outcome = client(&transport).fetch_profile(&StaticToken::none()).await;

    assert_eq!(outcome, ProfileOutcome::Failed(ClientError::Token(TokenError::NoSession)));
    assert!(transport.requests().is_empty());
}
