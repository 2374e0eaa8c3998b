//! Client settings read from the process environment.

use std::time::Duration;

use crate::error::{Error, Result};

/// Base URL of the auth service (required).
pub const ENV_URL: &str = "ARAS_AUTH_URL";

/// Request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "ARAS_AUTH_TIMEOUT_SECS";

/// Initial bearer token.
pub const ENV_TOKEN: &str = "ARAS_AUTH_TOKEN";

/// Allows plain HTTP and skips certificate verification when truthy.
pub const ENV_INSECURE: &str = "ARAS_AUTH_INSECURE";

/// Client settings collected from `ARAS_AUTH_*` variables.
///
/// Usually consumed through
/// [`ClientBuilder::from_env`](crate::ClientBuilder::from_env).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Value of `ARAS_AUTH_URL`.
    pub url: String,
    /// Value of `ARAS_AUTH_TIMEOUT_SECS`.
    pub timeout: Option<Duration>,
    /// Value of `ARAS_AUTH_TOKEN`.
    pub token: Option<String>,
    /// Value of `ARAS_AUTH_INSECURE`.
    pub insecure: bool,
}

impl EnvConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `ARAS_AUTH_URL` is unset or any
    /// variable holds a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable
    /// name to its value.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use aras_auth::config::EnvConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("ARAS_AUTH_URL", "https://auth.example.com"),
    ///     ("ARAS_AUTH_TIMEOUT_SECS", "5"),
    /// ]);
    /// let config = EnvConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.timeout, Some(std::time::Duration::from_secs(5)));
    /// assert!(!config.insecure);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = get(ENV_URL)
            .ok_or_else(|| Error::configuration(format!("{} is not set", ENV_URL)))?;

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    Error::configuration(format!(
                        "{} must be a whole number of seconds, got {:?}",
                        ENV_TIMEOUT_SECS, raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            },
            None => None,
        };

        let insecure = match get(ENV_INSECURE) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                Error::configuration(format!("{} must be true or false, got {:?}", ENV_INSECURE, raw))
            })?,
            None => false,
        };

        Ok(Self {
            url,
            timeout,
            token: get(ENV_TOKEN),
            insecure,
        })
    }
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("insecure", &self.insecure)
            .finish()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
