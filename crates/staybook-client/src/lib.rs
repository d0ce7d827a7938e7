//! Client
//!
//! Fetch-and-validate half of the Staybook sync layer. Talks to the booking
//! backend through a [`Transport`], checks every response envelope, and
//! returns typed outcomes ([`RoomsOutcome`], [`ProfileOutcome`]) for the
//! application layer to apply. This crate never holds application state.
//!
//! # Components
//!
//! - [`SyncClient`]: Issues the room listing and user profile requests
//! - [`Transport`]: Seam for the HTTP layer (`GET` with optional bearer token)
//! - [`TokenSource`]: Seam for the identity provider's token issuer
//! - [`RetryPolicy`]: Delay schedule for profile logical failures
//!
//! # Transport (optional)
//!
//! With the `http` feature enabled, this crate also provides
//! [`HttpTransport`], a reqwest-backed [`Transport`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod error;
mod event;
mod identity;
mod retry;
mod transport;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use client::{ROOMS_PATH, SyncClient, USER_PATH};
pub use error::{ClientError, TokenError, TransportError};
pub use event::{ProfileOutcome, RoomsOutcome};
pub use identity::{Identity, StaticToken, TokenSource};
pub use retry::RetryPolicy;
pub use staybook_core::{Room, RoomBatch, UserProfile, env::Environment};
pub use transport::{Request, Transport};
