//! Scripted transport.
//!
//! Replies are queued per path. A queued reply is used once; when a path's
//! queue is empty the standing reply for that path (if any) answers instead.
//! Unscripted paths fail with [`TransportError::Request`].
//!
//! Optional latency is slept on the tokio clock, which keeps a request in
//! flight until the test advances time.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::Value;
use staybook_client::{Request, Transport, TransportError};

/// Scripted reply to one request.
pub type Reply = Result<Value, TransportError>;

/// In-memory transport answering from a script.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<Script>,
}

#[derive(Debug, Default)]
struct Script {
    queued: HashMap<String, VecDeque<Reply>>,
    standing: HashMap<String, Reply>,
    requests: Vec<Request>,
    latency: Duration,
}

impl ScriptedTransport {
    /// Create a transport with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot reply for `path`.
    pub fn push(&self, path: &str, reply: Reply) {
        self.lock().queued.entry(path.to_owned()).or_default().push_back(reply);
    }

    /// Queue a one-shot successful body for `path`.
    pub fn respond(&self, path: &str, body: Value) {
        self.push(path, Ok(body));
    }

    /// Queue a one-shot transport failure for `path`.
    pub fn fail(&self, path: &str, error: TransportError) {
        self.push(path, Err(error));
    }

    /// Answer `path` with `reply` whenever its queue is empty.
    pub fn always(&self, path: &str, reply: Reply) {
        self.lock().standing.insert(path.to_owned(), reply);
    }

    /// Delay every reply by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.lock().latency = latency;
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    /// Number of requests received for `path`.
    pub fn calls(&self, path: &str) -> usize {
        self.lock().requests.iter().filter(|request| request.path == path).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, request: Request) -> Result<Value, TransportError> {
        let (reply, latency) = {
            let mut script = self.lock();
            let path = request.path.clone();
            script.requests.push(request);

            let reply = script
                .queued
                .get_mut(&path)
                .and_then(VecDeque::pop_front)
                .or_else(|| script.standing.get(&path).cloned())
                .unwrap_or_else(|| {
                    Err(TransportError::Request(format!("no scripted reply for {path}")))
                });
            (reply, script.latency)
        };

        tracing::trace!(latency_ms = latency.as_millis() as u64, ok = reply.is_ok(), "scripted reply");

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        reply
    }
}
