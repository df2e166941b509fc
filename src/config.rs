//! Wiki.js connection configuration.
//!
//! The configuration is an explicit value: binaries build it once from the
//! environment (and command-line overrides) and hand it to the dispatcher or
//! HTTP state. Nothing in the library reads the environment on its own.

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/graphql";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WIKIJS_URL must be set")]
    #[diagnostic(
        code(wikijs_mcp::config::missing_url),
        help("Set WIKIJS_URL to the base URL of your Wiki.js instance, or pass --url.")
    )]
    MissingUrl,

    #[error("WIKIJS_API_KEY must be set")]
    #[diagnostic(
        code(wikijs_mcp::config::missing_api_key),
        help("Create an API key under Administration > API Access and set WIKIJS_API_KEY, or pass --api-key.")
    )]
    MissingApiKey,

    #[error("Invalid value for {name}: '{value}'")]
    #[diagnostic(code(wikijs_mcp::config::invalid_value))]
    InvalidValue { name: String, value: String },
}

/// Wiki.js connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    /// Base URL of the Wiki.js instance, e.g. `https://wiki.example.com`
    pub url: String,
    /// Bearer token sent with every GraphQL request
    pub api_key: String,
    /// Path of the GraphQL endpoint relative to `url`
    pub graphql_endpoint: String,
    /// Locale used when a tool call does not name one
    pub default_locale: String,
    /// Upper bound for a single GraphQL round-trip
    pub timeout: Duration,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WikiConfig {
    /// Create a configuration for the given instance with default settings.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout = match get("WIKIJS_TIMEOUT_SECS") {
            Some(raw) => {
                let invalid = || ConfigError::InvalidValue {
                    name: "WIKIJS_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                };
                // A zero timeout fails every request before it is sent.
                let secs: u64 = raw.trim().parse().map_err(|_| invalid())?;
                if secs == 0 {
                    return Err(invalid());
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Self {
            url: get("WIKIJS_URL").unwrap_or_default(),
            api_key: get("WIKIJS_API_KEY").unwrap_or_default(),
            graphql_endpoint: get("WIKIJS_GRAPHQL_ENDPOINT").unwrap_or(defaults.graphql_endpoint),
            default_locale: get("WIKIJS_LOCALE").unwrap_or(defaults.default_locale),
            timeout,
        })
    }

    /// Apply command-line overrides; explicit values win over the environment.
    pub fn with_overrides(mut self, url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(api_key) = api_key {
            self.api_key = api_key;
        }
        self
    }

    /// Check that the settings required for any request are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    /// Full URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.graphql_endpoint)
    }
}
