//! Outbound request envelope.
//!
//! Every call is a single JSON object:
//!
//! ```json
//! {
//!   "method": "createPlaylist",
//!   "parameters": { "name": "...", "songIDs": [30717514] },
//!   "header": { "sessionID": "abc123", "wsKey": "public-key" }
//! }
//! ```
//!
//! `sessionID` is only present once a session has been started.
//! `parameters` is `null` for methods that take none.

use crate::error::Result;
use crate::session::Session;
use serde::Serialize;
use serde_json::{Map, Value};

/// Method parameters.
pub type Parameters = Map<String, Value>;

/// The canonical request shape sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Remote method name, e.g. `"getPlaylist"`.
    pub method: String,
    /// Method parameters, passed through unchanged.
    pub parameters: Option<Parameters>,
    /// Credentials and session context.
    pub header: Header,
}

/// The `header` block of an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    #[serde(rename = "sessionID", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(rename = "wsKey")]
    pub ws_key: String,
}

impl Envelope {
    /// Assemble an envelope for `method`.
    ///
    /// `wsKey` is always the public key; `sessionID` is attached iff the
    /// session is active. No validation of the method or parameters is
    /// done here, the service is the authority on both.
    pub fn build(
        method: &str,
        parameters: Option<Parameters>,
        public_key: &str,
        session: &Session,
    ) -> Self {
        Self {
            method: method.to_owned(),
            parameters,
            header: Header {
                session_id: session.id().map(str::to_owned),
                ws_key: public_key.to_owned(),
            },
        }
    }

    /// Serialize to the exact bytes that get signed and posted.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
