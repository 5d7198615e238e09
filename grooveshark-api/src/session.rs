//! Session state and the session-scoped methods.
//!
//! | Method           | Remote method  | Transport | Result            |
//! |------------------|----------------|-----------|-------------------|
//! | `start_session`  | `startSession` | https     | session id        |
//! | `authenticate`   | `authenticate` | https     | [`User`]          |
//! | `logout`         | `logout`       | https     | `()`              |
//! | `ping_service`   | `pingService`  | https     | greeting string   |
//!
//! A session starts out absent. A successful `startSession` stores the
//! returned id, and every later envelope carries it as `header.sessionID`
//! until `logout` clears it. The session lives only as long as the client.

use crate::client::{GroovesharkClient, check};
use crate::crypto::password_digest;
use crate::envelope::Parameters;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{SessionStarted, User};
use serde_json::Value;
use tracing::info;

/// Server-issued session id, absent until `startSession` succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    id: Option<String>,
}

impl Session {
    /// The active session id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.id().is_some()
    }

    pub(crate) fn set(&mut self, id: String) {
        self.id = Some(id);
    }

    pub(crate) fn clear(&mut self) {
        self.id = None;
    }
}

impl<T: Transport> GroovesharkClient<T> {
    /// Start a new session and remember its id.
    ///
    /// Replaces any session already held.
    pub fn start_session(&mut self) -> Result<String> {
        let started: SessionStarted =
            self.call_acknowledged("startSession", None, true, "start session")?;
        info!("session started");
        self.session_mut().set(started.session_id.clone());
        Ok(started.session_id)
    }

    /// Log a user in, starting a session first if none is active.
    ///
    /// The password is sent as its MD5 hex digest.
    pub fn authenticate(&mut self, login: &str, password: &str) -> Result<User> {
        if !self.session().is_active() {
            self.start_session()?;
        }
        let mut params = Parameters::new();
        params.insert("login".into(), Value::from(login));
        params.insert("password".into(), Value::from(password_digest(password)));
        self.call_acknowledged("authenticate", Some(params), true, "authenticate")
    }

    /// End the current session on the server and forget it locally.
    pub fn logout(&mut self) -> Result<()> {
        let raw = self.call_raw("logout", None, true)?;
        check("logout", &raw)?;
        self.session_mut().clear();
        info!("session cleared");
        Ok(())
    }

    /// Health check; the service answers with a greeting string.
    pub fn ping_service(&self) -> Result<String> {
        self.call("pingService", None, true)
    }
}
