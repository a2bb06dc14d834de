//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Inbound server configuration
    #[serde(default)]
    pub server: ServerSection,

    /// Outbound transport configuration
    #[serde(default)]
    pub transport: TransportSection,
}

/// Inbound server section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Listen address
    pub listen: Option<String>,

    /// Maximum inbound body size in bytes
    pub max_body_bytes: Option<usize>,
}

/// Outbound transport section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportSection {
    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Maximum redirects followed per delivery
    pub max_redirects: Option<usize>,

    /// Report non-2xx target responses as failures
    pub status_errors: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# webhook-relay configuration file

[server]
# Address to listen on (default: 127.0.0.1:8080)
listen = "127.0.0.1:8080"

# Maximum inbound request body in bytes (default: 2 MiB)
# max_body_bytes = 2097152

[transport]
# Outbound connect timeout in seconds (default: 10)
# connect_timeout = 10

# Redirects followed per delivery, 0 disables (default: 10)
# max_redirects = 10

# Report non-2xx target responses as failures carrying the target status
# (default: true). When false, they are passed through unchanged.
# status_errors = true
"#
    .to_string()
}
