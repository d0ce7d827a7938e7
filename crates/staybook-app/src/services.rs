//! External collaborators.
//!
//! The application layer does not render, route, or authenticate. It only
//! needs somewhere to send user-visible failures ([`Notifier`]), an opaque
//! navigation capability to hand to consumers ([`Navigator`]), and the
//! client-side seams for the backend and identity provider.

use std::sync::Arc;

use staybook_client::{TokenSource, Transport};

/// Sink for user-visible failure messages (toasts, banners, stderr).
pub trait Notifier: Send + Sync {
    /// Show a failure message.
    fn error(&self, message: &str);
}

/// Navigation capability. Passed through to consumers untouched.
pub trait Navigator: Send + Sync {
    /// Navigate to `path`.
    fn navigate(&self, path: &str);
}

/// Bundle of collaborators injected into the [`crate::AppContext`].
#[derive(Clone)]
pub struct Services {
    /// Backend transport. Shared by the sync layer and consumers.
    pub transport: Arc<dyn Transport>,
    /// Bearer token issuer for the signed-in identity.
    pub tokens: Arc<dyn TokenSource>,
    /// Navigation capability.
    pub navigator: Arc<dyn Navigator>,
    /// Failure notification sink.
    pub notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
