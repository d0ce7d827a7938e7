//! Transport seam.
//!
//! The sync layer only ever issues `GET` requests against a configured base
//! endpoint. A [`Transport`] turns a [`Request`] into a decoded JSON body, or
//! a [`TransportError`] when no body could be obtained.

use async_trait::async_trait;
use serde_json::Value;

use crate::TransportError;

/// A `GET` request relative to the backend's base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path including the leading slash, e.g. `/api/rooms`.
    pub path: String,
    /// Bearer token for the `Authorization` header. `None` for
    /// unauthenticated requests.
    pub bearer: Option<String>,
}

impl Request {
    /// Unauthenticated `GET` for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self { path: path.into(), bearer: None }
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// `Authorization` header value, if authenticated.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Sends requests to the booking backend.
///
/// Implementations must treat non-2xx statuses and undecodable bodies as
/// errors; the caller only interprets bodies of successful responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and decode the body as JSON.
    async fn get(&self, request: Request) -> Result<Value, TransportError>;
}
