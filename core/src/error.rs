//! Error types for the physician API client.
//!
//! # Design
//! Callers treat every `ApiError` the same way: a communication failure that
//! is shown to the user and logged. The variants exist for logs and tests,
//! not for branching. `NotFound` is split out because the backend answers 404
//! for a stale id; every other non-2xx status lands in `HttpError` with the
//! raw status and body.

use thiserror::Error;

/// Errors returned by `MedicoClient` build/parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the physician does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host could not complete the round-trip.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Every client error is a communication failure; there is no
    /// finer-grained recovery.
    pub fn is_communication_failure(&self) -> bool {
        true
    }
}

/// Failure reported by a `Transport` that never produced an HTTP response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn transport_error_converts() {
        let err: ApiError = TransportError::new("connection refused").into();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "transport failed: connection refused");
        assert!(err.is_communication_failure());
    }
}
