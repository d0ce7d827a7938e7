//! Scripted bearer token source.

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use staybook_client::{TokenError, TokenSource};

/// Token source whose answer can be changed mid-test.
#[derive(Debug)]
pub struct ScriptedTokens {
    next: Mutex<Result<String, TokenError>>,
    issued: AtomicUsize,
}

impl ScriptedTokens {
    /// Always issue `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self { next: Mutex::new(Ok(token.into())), issued: AtomicUsize::new(0) }
    }

    /// Always fail with `error`.
    pub fn failing(error: TokenError) -> Self {
        Self { next: Mutex::new(Err(error)), issued: AtomicUsize::new(0) }
    }

    /// Replace the answer for subsequent requests.
    pub fn set(&self, next: Result<String, TokenError>) {
        *self.next.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Number of token requests answered.
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenSource for ScriptedTokens {
    async fn token(&self) -> Result<String, TokenError> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.next.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
