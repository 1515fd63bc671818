//! Error types for the todo client.
//!
//! # Design
//! `ApiError` describes what went wrong on the wire and is what the sans-IO
//! `TodoApi` parse methods return. `TodoError` is what `TodoClient`
//! operations return: every wire failure collapses into `RequestFailed`,
//! whose `Display` is the static message shown to the user. The `ApiError`
//! stays attached as the source for logs.

use std::fmt;

use thiserror::Error;

use crate::validate::ValidationError;

/// The host failed to complete an HTTP round-trip (connect, timeout, I/O).
#[derive(Debug, Clone, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Errors returned by `TodoApi` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404, the todo does not exist.
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

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// The four API operations, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Fetch => "fetch todos",
            Operation::Create => "create todo",
            Operation::Update => "update todo",
            Operation::Delete => "delete todo",
        };
        f.write_str(s)
    }
}

/// Errors returned by `TodoClient` operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Any network, status, or decoding failure. Displays as the static
    /// notification, e.g. "Failed to create todo".
    #[error("Failed to {op}")]
    RequestFailed {
        op: Operation,
        #[source]
        source: ApiError,
    },

    /// The form input was rejected before any request was issued.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// An update was submitted while the form is in create mode.
    #[error("no todo is being edited")]
    NotEditing,

    /// A submit is already in flight.
    #[error("a submission is already in progress")]
    Busy,
}

impl TodoError {
    pub(crate) fn request_failed(op: Operation, source: ApiError) -> Self {
        TodoError::RequestFailed { op, source }
    }

    /// The failed operation, if this error came from the wire.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            TodoError::RequestFailed { op, .. } => Some(*op),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_shows_only_static_message() {
        let err = TodoError::request_failed(
            Operation::Create,
            ApiError::HttpError {
                status: 500,
                body: "stack trace".to_string(),
            },
        );
        assert_eq!(err.to_string(), "Failed to create todo");
        assert_eq!(err.operation(), Some(Operation::Create));
    }

    #[test]
    fn each_operation_has_its_message() {
        let messages: Vec<String> = [
            Operation::Fetch,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
        ]
        .into_iter()
        .map(|op| TodoError::request_failed(op, ApiError::NotFound).to_string())
        .collect();
        assert_eq!(
            messages,
            [
                "Failed to fetch todos",
                "Failed to create todo",
                "Failed to update todo",
                "Failed to delete todo",
            ]
        );
    }

    #[test]
    fn source_keeps_wire_detail() {
        use std::error::Error;
        let err = TodoError::request_failed(
            Operation::Fetch,
            ApiError::Transport(TransportError::new("connection refused")),
        );
        let source = err.source().unwrap().to_string();
        assert_eq!(source, "transport failed: connection refused");
    }
}
