use serde::{Deserialize, Serialize};
use std::{env, path::Path, time::Duration};
use tronald_core::{
    constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT_PRODUCT},
    ConfigError,
};
use url::Url;

pub const ENV_BASE_URL: &str = "TRONALD_BASE_URL";
pub const ENV_USER_AGENT: &str = "TRONALD_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "TRONALD_TIMEOUT_SECS";

/// Static configuration of a [`crate::TronaldClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin all resource paths are appended to
    pub base_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Per-request timeout applied by the HTTP transport
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `tronalddump-io/client-rust-<version>`, or the bare product token when the
/// version is not known at build time
pub fn default_user_agent() -> String {
    match option_env!("CARGO_PKG_VERSION") {
        Some(version) if !version.is_empty() => format!("{USER_AGENT_PRODUCT}-{version}"),
        _ => USER_AGENT_PRODUCT.to_string(),
    }
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sub-second remainders round up to the next whole second
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs();
        self.timeout_secs = if timeout.subsec_nanos() > 0 {
            secs.saturating_add(1)
        } else {
            secs
        };
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::parse_error(e.to_string()))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::parse_error(e.to_string()))
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::file_read(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Defaults overridden by `TRONALD_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// Override fields from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            self.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout
                .parse()
                .map_err(|e| ConfigError::invalid_env_var(ENV_TIMEOUT_SECS, format!("{e}")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid_field("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid_field(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_field(
                "timeout_secs",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub(crate) fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
