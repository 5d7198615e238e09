//! Client configuration.

use std::time::Duration;

/// Production host of the public web service.
pub const DEFAULT_HOST: &str = "api.grooveshark.com";
/// Path of the single RPC endpoint on [`DEFAULT_HOST`].
pub const DEFAULT_PATH: &str = "ws3.php";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how requests are sent.
///
/// The defaults target the production service. Override `host`/`path` to
/// point at a proxy or a local test server (`host` may carry a port).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host (and optional `:port`) without scheme.
    pub host: String,
    /// Endpoint path without the leading slash.
    pub path: String,
    /// Whole-request timeout; expiry surfaces as an HTTP error.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            path: DEFAULT_PATH.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("grooveshark-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Set the endpoint host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for a request carrying `signature`.
    ///
    /// `https` when `secure`, plain `http` otherwise.
    pub fn endpoint_url(&self, secure: bool, signature: &str) -> String {
        let scheme = if secure { "https" } else { "http" };
        format!(
            "{scheme}://{}/{}?sig={signature}",
            self.host,
            self.path.trim_start_matches('/')
        )
    }
}
