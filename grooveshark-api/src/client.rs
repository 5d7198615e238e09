//! Signed RPC client for the Grooveshark public web service.
//!
//! Every call follows the same pipeline:
//!
//! 1. Build an [`Envelope`] `{ method, parameters, header }`, attaching the
//!    public key and, if one is active, the session id
//! 2. Serialize it to JSON bytes
//! 3. HMAC-MD5 the bytes with the secret key → `sig` (hex)
//! 4. POST the bytes to `{http|https}://api.grooveshark.com/ws3.php?sig=...`
//! 5. Classify the body (non-zero `errors` entry → [`GroovesharkError::Service`])
//! 6. Decode `result` into the caller's type (→ [`GroovesharkError::Decode`])
//!
//! Typed methods live in separate modules (`session`, `playlist`,
//! `favorites`) as `impl GroovesharkClient` blocks.

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::crypto::sign;
use crate::envelope::{Envelope, Parameters};
use crate::error::{GroovesharkError, Result};
use crate::response::{RawResponse, classify, decode};
use crate::session::Session;
use crate::transport::{HttpTransport, Transport};
use crate::types::Acknowledged;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Blocking client for the Grooveshark API.
///
/// Holds the credentials, the endpoint config, the transport, and the
/// current [`Session`]. Methods that start or end a session take
/// `&mut self`; everything else borrows shared.
pub struct GroovesharkClient<T = HttpTransport> {
    transport: T,
    credentials: Credentials,
    config: ClientConfig,
    session: Session,
}

impl GroovesharkClient<HttpTransport> {
    /// Create a client for the production service.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with an explicit [`ClientConfig`].
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config, transport))
    }
}

impl<T: Transport> GroovesharkClient<T> {
    /// Create a client over any [`Transport`].
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            credentials,
            config,
            session: Session::default(),
        }
    }

    /// Return a reference to the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Envelope for `method` in the current session context.
    pub fn envelope(&self, method: &str, params: Option<Parameters>) -> Envelope {
        Envelope::build(method, params, self.credentials.public_key(), &self.session)
    }

    /// Sign and send `method`, returning the unclassified response.
    pub fn call_raw(
        &self,
        method: &str,
        params: Option<Parameters>,
        secure: bool,
    ) -> Result<RawResponse> {
        let envelope = self.envelope(method, params);
        debug!(
            method,
            secure,
            session = self.session.is_active(),
            "calling remote method"
        );
        self.send(&envelope, secure)
    }

    /// Send `envelope`: serialize, sign exactly those bytes, POST.
    pub fn send(&self, envelope: &Envelope, secure: bool) -> Result<RawResponse> {
        let body = envelope.to_bytes()?;
        let signature = sign(&body, self.credentials.secret_key().as_bytes());
        let url = self.config.endpoint_url(secure, &signature);

        let raw = self.transport.post(&url, body)?;
        if raw.status != 200 {
            debug!(status = raw.status, method = %envelope.method, "unexpected HTTP status");
        }
        Ok(raw)
    }

    /// Call `method` and decode its `result` into `R`.
    ///
    /// Fails with [`GroovesharkError::Service`] if the service reported an
    /// error, [`GroovesharkError::Decode`] if `result` is not an `R`.
    pub fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Parameters>,
        secure: bool,
    ) -> Result<R> {
        let raw = self.call_raw(method, params, secure)?;
        check(method, &raw)?;
        decode(&raw)
    }

    /// [`call`](Self::call) plus the method's own `success` flag.
    pub(crate) fn call_acknowledged<R: DeserializeOwned + Acknowledged>(
        &self,
        method: &str,
        params: Option<Parameters>,
        secure: bool,
        operation: &'static str,
    ) -> Result<R> {
        let resp: R = self.call(method, params, secure)?;
        if !resp.success() {
            warn!(method, "{operation} reported success=false");
            return Err(GroovesharkError::Operation { operation });
        }
        Ok(resp)
    }
}

/// Classify `raw`, logging and raising any service-level error.
pub(crate) fn check(method: &str, raw: &RawResponse) -> Result<()> {
    if let Some(report) = classify(raw) {
        let codes: Vec<i64> = report.codes().collect();
        warn!(method, ?codes, "service rejected call");
        return Err(report.into());
    }
    Ok(())
}
