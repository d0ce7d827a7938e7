//! Application layer for Staybook
//!
//! Shared state container and sync orchestration for the booking client. One
//! [`AppContext`] is created at startup and handed to every consumer; there
//! is no ambient global.
//!
//! # Components
//!
//! - [`App`]: Pure state machine over [`AppState`] (events in, actions out)
//! - [`Store`]: Observable wrapper around [`App`] (watch channel per change)
//! - [`Bridge`]: Translates client sync outcomes into [`AppEvent`]s
//! - [`AppContext`]: Consumer surface (state, setters, sync operations)
//! - [`Runtime`]: Owns background sync tasks and the identity state machine

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod config;
mod context;
mod event;
mod identity;
mod runtime;
mod services;
mod state;
mod store;
mod system_env;

pub use action::AppAction;
pub use app::App;
pub use bridge::{Bridge, PROFILE_FAILURE_FALLBACK, ProfileStep, ROOMS_FAILURE_FALLBACK};
pub use config::{AppConfig, DEFAULT_CURRENCY};
pub use context::AppContext;
pub use event::AppEvent;
pub use identity::{IdentityTracker, IdentityTransition};
pub use runtime::Runtime;
pub use services::{Navigator, Notifier, Services};
pub use state::AppState;
pub use store::Store;
pub use system_env::SystemEnv;
