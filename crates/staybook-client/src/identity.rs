//! Identity provider seam.

use std::fmt;

use async_trait::async_trait;

use crate::TokenError;

/// Signed-in subject as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Provider-assigned subject identifier.
    pub subject: String,
}

impl Identity {
    /// Create an identity for `subject`.
    pub fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into() }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.subject)
    }
}

/// Issues bearer tokens for the current session.
///
/// May suspend (e.g. to refresh an expired session).
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fresh bearer token for the signed-in identity.
    async fn token(&self) -> Result<String, TokenError>;
}

/// Token source backed by a fixed token, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Always issue `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Never issue a token.
    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String, TokenError> {
        self.0.clone().ok_or(TokenError::NoSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_token_issues_configured_value() {
        assert_eq!(StaticToken::new("abc").token().await, Ok("abc".to_owned()));
        assert_eq!(StaticToken::none().token().await, Err(TokenError::NoSession));
    }
}
