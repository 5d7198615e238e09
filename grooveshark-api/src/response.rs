//! Response classification and decoding.
//!
//! The service answers HTTP 200 for every call, successful or not. The
//! outcome is decided by the body alone:
//!
//! ```json
//! { "errors": [ { "code": 102, "message": "Invalid method" } ] }
//! ```
//!
//! is a failure (any entry with a non-zero `code`), while
//!
//! ```json
//! { "header": { "hostname": "..." }, "result": { ... } }
//! ```
//!
//! is a success whose `result` shape depends on the method called.
//!
//! Always [`classify`] before [`decode`]: decoding an error body is not
//! meaningful.

use crate::error::{GroovesharkError, Result};
use crate::types::null_as_default;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code. Recorded, never used to decide the outcome.
    pub status: u16,
    /// Full response body.
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for [`classify`] turned into a `Result`.
    pub fn check(&self) -> std::result::Result<(), ServiceErrorReport> {
        match classify(self) {
            Some(report) => Err(report),
            None => Ok(()),
        }
    }
}

/// One entry of the service's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl ErrorEntry {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// All error entries of a rejected call, in the order the service sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceErrorReport {
    entries: Vec<ErrorEntry>,
}

impl ServiceErrorReport {
    pub fn new(entries: Vec<ErrorEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|e| e.code)
    }

    /// Whether any entry carries `code`.
    pub fn has_code(&self, code: i64) -> bool {
        self.codes().any(|c| c == code)
    }
}

impl fmt::Display for ServiceErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{} (code {})", entry.message, entry.code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceErrorReport {}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

/// Decide whether `raw` carries a service-level error.
///
/// Returns the full report when the body parses and at least one entry has
/// a non-zero code. Anything else (unparseable body, no `errors` key, an
/// empty array, only zero codes) is treated as success.
pub fn classify(raw: &RawResponse) -> Option<ServiceErrorReport> {
    let body: ErrorBody = serde_json::from_str(&raw.body).ok()?;
    if body.errors.iter().any(|e| e.code != 0) {
        Some(ServiceErrorReport::new(body.errors))
    } else {
        None
    }
}

// `header` (hostname etc.) is informational and skipped.
#[derive(Deserialize)]
struct SuccessBody<T> {
    result: T,
}

/// Decode the `result` field of a successful response into `T`.
///
/// `T` is whatever the called method returns: a record, a bare string, a
/// `{ "success": bool }` acknowledgement. The caller must know the shape.
pub fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    let body: SuccessBody<T> =
        serde_json::from_str(&raw.body).map_err(GroovesharkError::Decode)?;
    Ok(body.result)
}
