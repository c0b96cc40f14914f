//! Relay configuration
//!
//! Read once at startup from the environment and passed explicitly to the
//! relay client. Nothing reads the environment after that.

use crate::error::{Error, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Primary variable holding the relay access key
pub const ACCESS_KEY_VAR: &str = "CONTACT_ACCESS_KEY";

/// Fallback access key variable used by the site's build
pub const LEGACY_ACCESS_KEY_VAR: &str = "REACT_APP_ACCESS_KEY";

/// Optional override for the relay endpoint
pub const RELAY_URL_VAR: &str = "CONTACT_RELAY_URL";

/// Optional override for the relay timeout, in seconds
pub const RELAY_TIMEOUT_VAR: &str = "CONTACT_RELAY_TIMEOUT_SECS";

/// Relay endpoint used when none is configured
pub const DEFAULT_RELAY_URL: &str = "https://myportfolio-backend-phzl.onrender.com/send-mail";

/// Default relay timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Opaque relay credential
///
/// Formatting never reveals the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for the wire payload only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(<redacted>)")
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Relay connection settings
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Endpoint receiving the POST
    pub endpoint: Url,
    /// Credential attached to every payload
    pub access_key: AccessKey,
    /// Bound on a single relay call
    pub timeout: Duration,
}

impl RelayConfig {
    /// Build a config with the default endpoint and timeout
    pub fn new(access_key: AccessKey) -> Result<Self> {
        Ok(Self {
            endpoint: parse_endpoint(DEFAULT_RELAY_URL)?,
            access_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read configuration from the process environment
    ///
    /// Access key priority:
    /// 1. `CONTACT_ACCESS_KEY` environment variable
    /// 2. `REACT_APP_ACCESS_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let access_key = non_empty(ACCESS_KEY_VAR)
            .or_else(|| non_empty(LEGACY_ACCESS_KEY_VAR))
            .map(AccessKey::new)
            .ok_or(Error::MissingAccessKey(ACCESS_KEY_VAR))?;

        let mut config = Self::new(access_key)?;

        if let Some(raw) = non_empty(RELAY_URL_VAR) {
            config.endpoint = parse_endpoint(&raw)?;
        }

        if let Some(raw) = non_empty(RELAY_TIMEOUT_VAR) {
            config.timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }
}

/// Parse and check a relay endpoint URL
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("invalid relay URL {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "relay URL must be http or https, got {other}"
        ))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Config(format!(
            "{RELAY_TIMEOUT_VAR} must be a positive number of seconds, got {raw:?}"
        ))),
    }
}
