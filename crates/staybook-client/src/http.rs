//! HTTP transport for the client.
//!
//! Provides [`HttpTransport`], a thin reqwest wrapper. The base endpoint is
//! fixed at construction; a missing endpoint is not an error until a request
//! is actually made, matching how the application treats an unset backend
//! URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::{Request, Transport, TransportError};

/// Default per-request timeout (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Option<String>,
}

impl HttpTransport {
    /// Create a transport for `base_url` with the default timeout.
    pub fn new(base_url: Option<String>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a transport for `base_url` with a custom request timeout.
    ///
    /// The base URL is checked eagerly so misconfiguration surfaces at
    /// startup rather than on the first request.
    pub fn with_timeout(base_url: Option<String>, timeout: Duration) -> Result<Self, TransportError> {
        if let Some(base) = &base_url {
            Url::parse(base).map_err(|e| TransportError::InvalidUrl(format!("{base}: {e}")))?;
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("client setup failed: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let base = self.base_url.as_deref().ok_or(TransportError::NoEndpoint)?;
        join_url(base, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: Request) -> Result<Value, TransportError> {
        let url = self.url_for(&request.path)?;

        let mut builder = self.client.get(url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response =
            builder.send().await.map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.json::<Value>().await.ok().and_then(|body| {
                body.get("message").and_then(Value::as_str).map(str::to_owned)
            });
            return Err(TransportError::Status { status: status.as_u16(), message });
        }

        response.json::<Value>().await.map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Append `path` to `base`, keeping any path prefix on the base.
fn join_url(base: &str, path: &str) -> Result<Url, TransportError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{joined}: {e}")))
}
