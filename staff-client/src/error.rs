//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Well-formed reply signalling absence (bare string body)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-success HTTP status; `message` is the raw body text
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error taxonomy as seen by a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local, pre-network
    Validation,
    /// Bare string or empty list
    NotFoundOrEmpty,
    /// Non-success HTTP status with a textual reason
    Backend,
    /// Network or decoding failure
    Transport,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::NotFound(_) => ErrorKind::NotFoundOrEmpty,
            ClientError::Backend { .. } => ErrorKind::Backend,
            ClientError::Http(_)
            | ClientError::InvalidResponse(_)
            | ClientError::Internal(_)
            | ClientError::Serialization(_) => ErrorKind::Transport,
        }
    }

    /// Underlying failure description, without the category prefix
    pub fn diagnostic(&self) -> String {
        match self {
            ClientError::Http(e) => e.to_string(),
            ClientError::Serialization(e) => e.to_string(),
            ClientError::InvalidResponse(msg)
            | ClientError::Validation(msg)
            | ClientError::NotFound(msg)
            | ClientError::Internal(msg) => msg.clone(),
            ClientError::Backend { message, .. } => message.clone(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
