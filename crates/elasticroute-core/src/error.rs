//! Error types for the ElasticRoute client library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all plan operations.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A field was set to an invalid value, or a collection failed
    /// pre-submission validation
    #[error("{message}")]
    BadField { message: String },
    /// The remote service answered with a non-success status
    #[error("Remote service rejected the request with status {status}: {body}")]
    RemoteRejected { status: u16, body: String },
    /// The transport failed before a response was received
    #[error("Transport error: {message}")]
    Transport { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RouteError {
    /// Creates a `BadField` error with the given message.
    pub fn bad_field(message: impl Into<String>) -> Self {
        RouteError::BadField {
            message: message.into(),
        }
    }

    /// Creates a `RemoteRejected` error from a raw status and body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        RouteError::RemoteRejected {
            status,
            body: body.into(),
        }
    }

    /// Creates a `Transport` error.
    pub fn transport(message: impl Into<String>) -> Self {
        RouteError::Transport {
            message: message.into(),
        }
    }

    /// Returns true if this is a field or collection validation failure.
    pub fn is_bad_field(&self) -> bool {
        matches!(self, RouteError::BadField { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T> {
    /// Add context to any error type, converting to `RouteError::Configuration`.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| RouteError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, RouteError>;
