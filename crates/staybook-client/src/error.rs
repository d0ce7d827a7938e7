//! Client error types.

use thiserror::Error;

/// Transport-level failures: the request never produced a usable body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// No base endpoint was configured.
    #[error("no backend endpoint configured")]
    NoEndpoint,

    /// The base endpoint and path do not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Network-level failure (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status.
    #[error("request failed with status code {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, if the server sent one.
        message: Option<String>,
    },

    /// Body could not be decoded as JSON.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Failures obtaining a bearer token from the identity provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// No signed-in session to issue a token for.
    #[error("no active session")]
    NoSession,

    /// The provider failed to issue a token.
    #[error("token provider error: {0}")]
    Provider(String),
}

/// Any failure that prevents a sync from reading a response envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Transport failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Token retrieval failure.
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl ClientError {
    /// Returns true if this error may succeed on a later attempt.
    ///
    /// Network failures and 5xx responses are transient. Missing
    /// configuration, 4xx responses and undecodable bodies are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(TransportError::Request(_)) => true,
            Self::Transport(TransportError::Status { status, .. }) => *status >= 500,
            Self::Token(TokenError::Provider(_)) => true,
            Self::Transport(_) | Self::Token(TokenError::NoSession) => false,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// Prefers the server-supplied message on error statuses.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(TransportError::Status { message: Some(message), .. }) => {
                message.clone()
            },
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let err = ClientError::from(TransportError::Status { status: 503, message: None });
        assert!(err.is_transient());

        let err = ClientError::from(TransportError::Status { status: 401, message: None });
        assert!(!err.is_transient());

        assert!(!ClientError::from(TransportError::NoEndpoint).is_transient());
        assert!(!ClientError::from(TokenError::NoSession).is_transient());
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ClientError::from(TransportError::Status {
            status: 500,
            message: Some("Database unavailable".into()),
        });
        assert_eq!(err.user_message(), "Database unavailable");

        let err = ClientError::from(TransportError::Status { status: 500, message: None });
        assert_eq!(err.user_message(), "request failed with status code 500");
    }
}
