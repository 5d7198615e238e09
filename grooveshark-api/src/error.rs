//! Error types for the Grooveshark API client.

use crate::response::ServiceErrorReport;
use thiserror::Error;

/// Errors that can occur when calling the Grooveshark service.
///
/// The service answers HTTP 200 for everything, so the variants split by
/// *where* the call went wrong rather than by status code:
///
/// | Variant       | Meaning                                              |
/// |---------------|------------------------------------------------------|
/// | `Http`        | the request never produced a response body           |
/// | `Service`     | the body carried a non-zero `errors` entry           |
/// | `Decode`      | the body was clean but `result` had the wrong shape  |
/// | `Operation`   | decoded fine, but the method reported `success: false` |
#[derive(Debug, Error)]
pub enum GroovesharkError {
    /// HTTP transport error (DNS, connection refused, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the call. All entries are preserved.
    #[error("service error: {0}")]
    Service(#[from] ServiceErrorReport),

    /// The `result` field did not match the requested shape.
    #[error("unexpected result shape: {0}")]
    Decode(#[source] serde_json::Error),

    /// The call went through but the method's own `success` flag was false.
    #[error("{operation} failed")]
    Operation {
        /// Human-readable operation name, e.g. `"create playlist"`.
        operation: &'static str,
    },

    /// Failed to encode a request or parse the credentials file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error (credentials read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Neither the environment nor the credentials file supplied a key pair.
    #[error("no API credentials configured")]
    MissingCredentials,

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

impl GroovesharkError {
    /// Service error codes carried by this error, empty for every other kind.
    pub fn service_codes(&self) -> Vec<i64> {
        match self {
            Self::Service(report) => report.codes().collect(),
            _ => Vec::new(),
        }
    }
}

/// Convenience alias for `Result<T, GroovesharkError>`.
pub type Result<T> = std::result::Result<T, GroovesharkError>;
