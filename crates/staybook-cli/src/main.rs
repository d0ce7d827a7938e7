//! Staybook command-line driver.
//!
//! # Usage
//!
//! ```bash
//! # One-shot: sync rooms (and the profile, if a token is given), print state
//! staybook --backend-url http://localhost:3000 --token "$TOKEN"
//!
//! # Watch: keep the runtime alive and log every state change until Ctrl-C
//! staybook --backend-url http://localhost:3000 --token "$TOKEN" --watch
//! ```

mod services;

use std::{io::Write, sync::Arc, time::Duration};

use clap::Parser;
use services::{LogNavigator, LogNotifier};
use staybook_app::{AppConfig, AppContext, AppState, Runtime, Services, SystemEnv};
use staybook_client::{HttpTransport, Identity, RetryPolicy, StaticToken, TransportError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Legacy profile retry delay.
const LEGACY_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Staybook sync driver
#[derive(Parser, Debug)]
#[command(name = "staybook")]
#[command(about = "Sync the Staybook room catalog and user profile")]
#[command(version)]
struct Args {
    /// Base URL of the booking backend
    #[arg(long, env = "STAYBOOK_BACKEND_URL")]
    backend_url: Option<String>,

    /// Currency symbol shown next to prices
    #[arg(long, env = "STAYBOOK_CURRENCY")]
    currency: Option<String>,

    /// Bearer token for the signed-in user
    #[arg(long, env = "STAYBOOK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Subject of the signed-in user
    #[arg(long, env = "STAYBOOK_SUBJECT", default_value = "local")]
    subject: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Keep running and log state changes until Ctrl-C
    #[arg(long)]
    watch: bool,

    /// Retry profile failures every 5 seconds forever
    #[arg(long)]
    retry_legacy: bool,
}

impl Args {
    fn config(&self) -> AppConfig {
        let config = AppConfig::new(self.currency.clone(), self.backend_url.clone());
        if self.retry_legacy {
            config.with_profile_retry(RetryPolicy::fixed(LEGACY_RETRY_DELAY))
        } else {
            config
        }
    }

    /// Signed in iff a token was supplied.
    fn identity(&self) -> Option<Identity> {
        self.token.as_ref().map(|_| Identity::new(self.subject.clone()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = args.config();
    tracing::info!(
        backend_url = config.backend_url.as_deref(),
        currency = %config.currency,
        "Staybook starting"
    );
    if config.backend_url.is_none() {
        tracing::warn!("No backend URL configured - every request will fail");
    }

    let context = build_context(config, args.token.clone())?;

    if args.watch {
        watch(context, args.identity()).await?;
    } else {
        once(&context, args.identity()).await?;
    }

    Ok(())
}

/// Wire the HTTP transport and log-backed collaborators into a context.
fn build_context(
    config: AppConfig,
    token: Option<String>,
) -> Result<AppContext<SystemEnv>, TransportError> {
    let transport = Arc::new(HttpTransport::new(config.backend_url.clone())?);
    let tokens = Arc::new(token.map_or_else(StaticToken::none, StaticToken::new));
    let services = Services {
        transport,
        tokens,
        navigator: Arc::new(LogNavigator),
        notifier: Arc::new(LogNotifier),
    };
    Ok(AppContext::new(config, SystemEnv::new(), services))
}

/// Run each sync once, then print the resulting state.
async fn once(context: &AppContext<SystemEnv>, identity: Option<Identity>) -> std::io::Result<()> {
    let state = sync_once(context, identity).await;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &state)?;
    writeln!(stdout)
}

/// Record the signed-in identity, run the rooms sync and (when signed in) the
/// profile sync, and return the settled state.
async fn sync_once(context: &AppContext<SystemEnv>, identity: Option<Identity>) -> AppState {
    let transition = context.record_identity(identity);
    tracing::debug!(?transition, "identity recorded");

    context.sync_rooms().await;
    if let Some(identity) = context.identity() {
        tracing::debug!(subject = %identity, "syncing user profile");
        context.sync_user_profile().await;
    }

    let state = context.state();
    tracing::info!(
        rooms = state.rooms.len(),
        is_owner = state.is_owner,
        searched_cities = state.searched_cities.len(),
        "sync complete"
    );
    state
}

/// Drive the runtime until Ctrl-C.
async fn watch(context: AppContext<SystemEnv>, identity: Option<Identity>) -> std::io::Result<()> {
    let mut observer = context.subscribe();
    let mut runtime = Runtime::new(context);

    runtime.start();
    let transition = runtime.identity_changed(identity);
    tracing::info!(?transition, "watching for state changes (Ctrl-C to stop)");

    loop {
        tokio::select! {
            changed = observer.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = observer.borrow_and_update().clone();
                tracing::info!(
                    rooms = state.rooms.len(),
                    loading = state.loading,
                    is_owner = state.is_owner,
                    searched_cities = ?state.searched_cities,
                    "state changed"
                );
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                tracing::info!("Shutting down");
                break;
            },
        }
    }

    runtime.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_resolve_to_default_config() {
        let args = Args::try_parse_from(["staybook"]).unwrap();

        assert_eq!(args.config(), AppConfig::default());
        assert_eq!(args.identity(), None);
        assert!(!args.watch);
    }

    #[test]
    fn token_implies_identity() {
        let args =
            Args::try_parse_from(["staybook", "--token", "abc", "--subject", "user_1"]).unwrap();

        assert_eq!(args.identity(), Some(Identity::new("user_1")));
    }

    #[test]
    fn legacy_flag_selects_fixed_schedule() {
        let args =
            Args::try_parse_from(["staybook", "--retry-legacy", "--currency", "€"]).unwrap();
        let config = args.config();

        assert_eq!(config.profile_retry, RetryPolicy::fixed(LEGACY_RETRY_DELAY));
        assert_eq!(config.currency, "€");
    }

    #[tokio::test]
    async fn one_shot_records_identity_without_backend() {
        let args =
            Args::try_parse_from(["staybook", "--token", "abc", "--subject", "user_1"]).unwrap();
        let context = build_context(args.config(), args.token.clone()).unwrap();

        let state = sync_once(&context, args.identity()).await;

        assert_eq!(context.identity(), Some(Identity::new("user_1")));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn invalid_backend_url_fails_context_setup() {
        let args = Args::try_parse_from(["staybook", "--backend-url", "not a url"]).unwrap();

        let err = build_context(args.config(), None).unwrap_err();

        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }
}
