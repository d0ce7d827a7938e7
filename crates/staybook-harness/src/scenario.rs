//! Scenario wiring.
//!
//! A [`Scenario`] builds an [`AppContext`] over scripted collaborators and
//! keeps handles to each of them so tests can script inputs and inspect
//! effects.

use std::sync::Arc;

use staybook_app::{AppConfig, AppContext, AppState, Runtime, Services};

use crate::{RecordingNavigator, RecordingNotifier, ScriptedTokens, ScriptedTransport, SimEnv};

/// Yields often enough for spawned sync tasks to run to their next timer.
///
/// Does not advance the clock.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

/// Fully wired context over scripted collaborators.
#[derive(Debug)]
pub struct Scenario {
    /// Backend script.
    pub transport: Arc<ScriptedTransport>,
    /// Token script.
    pub tokens: Arc<ScriptedTokens>,
    /// Captured failure notifications.
    pub notifier: Arc<RecordingNotifier>,
    /// Captured navigation.
    pub navigator: Arc<RecordingNavigator>,
    /// Virtual clock shared with the context.
    pub env: SimEnv,
    /// Context under test.
    pub context: AppContext<SimEnv>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// Scenario with default configuration and token `"test-token"`.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Scenario with `config`.
    pub fn with_config(config: AppConfig) -> Self {
        let transport = Arc::new(ScriptedTransport::new());
        let tokens = Arc::new(ScriptedTokens::new("test-token"));
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let env = SimEnv::new();

        let services = Services {
            transport: transport.clone(),
            tokens: tokens.clone(),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
        };
        let context = AppContext::new(config, env.clone(), services);

        Self { transport, tokens, notifier, navigator, env, context }
    }

    /// Runtime over this scenario's context.
    pub fn runtime(&self) -> Runtime<SimEnv> {
        Runtime::new(self.context.clone())
    }

    /// Current published state.
    pub fn state(&self) -> AppState {
        self.context.state()
    }
}
