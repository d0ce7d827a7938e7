//! Terminal implementations of the UI collaborators.

use staybook_app::{Navigator, Notifier};

/// Reports failure notifications through the log.
#[derive(Debug, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        tracing::error!(%message, "sync failed");
    }
}

/// Logs navigation requests. There is nothing to navigate in a terminal.
#[derive(Debug, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigation requested");
    }
}
