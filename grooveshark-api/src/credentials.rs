//! API credentials: the public/secret key pair issued to integrators.
//!
//! Resolved from the environment (`GROOVESHARK_KEY`, `GROOVESHARK_SECRET`)
//! or from `~/.config/grooveshark/credentials.json`:
//!
//! ```json
//! { "key": "your-public-key", "secret": "your-secret-key" }
//! ```
//!
//! The public key travels in every request header as `wsKey`; the secret
//! key never leaves the process and only keys the request signature.

use crate::error::{GroovesharkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the public key.
pub const KEY_ENV: &str = "GROOVESHARK_KEY";
/// Environment variable holding the secret key.
pub const SECRET_ENV: &str = "GROOVESHARK_SECRET";

/// Public/secret key pair. Immutable once handed to a client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "key")]
    public_key: String,
    #[serde(rename = "secret")]
    secret_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Read both keys from the environment. `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(KEY_ENV).ok().filter(|k| !k.is_empty())?;
        let secret = std::env::var(SECRET_ENV).ok().filter(|s| !s.is_empty())?;
        Some(Self::new(key, secret))
    }

    /// Load credentials from the config file, `None` if it does not exist.
    pub fn load() -> Result<Option<Self>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Environment first, then the config file.
    pub fn resolve() -> Result<Self> {
        if let Some(creds) = Self::from_env() {
            return Ok(creds);
        }
        Self::load()?.ok_or(GroovesharkError::MissingCredentials)
    }

    /// Save to the config file, creating parent directories if needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(&path, data)?;
        Ok(path)
    }

    /// Delete the config file.
    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// `credentials.json` under the platform config dir (`$XDG_CONFIG_HOME/grooveshark`
    /// on Linux, `~/Library/Application Support/grooveshark` on macOS).
    fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| GroovesharkError::Other("cannot determine config directory".into()))?;
        Ok(config.join("grooveshark").join("credentials.json"))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_both_keys() {
        let creds = Credentials::new("pub", "secrets");
        assert_eq!(creds.public_key(), "pub");
        assert_eq!(creds.secret_key(), "secrets");
    }

    #[test]
    fn debug_redacts_secret() {
        let out = format!("{:?}", Credentials::new("pub", "hunter2"));
        assert!(out.contains("pub"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn file_format_uses_short_keys() {
        let json = serde_json::to_string(&Credentials::new("k", "s")).unwrap();
        assert_eq!(json, r#"{"key":"k","secret":"s"}"#);
        let back: Credentials = serde_json::from_str(r#"{"key":"a","secret":"b"}"#).unwrap();
        assert_eq!(back, Credentials::new("a", "b"));
    }
}
