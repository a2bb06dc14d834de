//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Address the relay listens on
    pub listen: SocketAddr,

    /// Maximum inbound body size in bytes
    pub max_body_bytes: usize,

    /// Outbound connect timeout
    pub connect_timeout: Duration,

    /// Redirects followed per delivery (0 disables following)
    pub max_redirects: usize,

    /// Whether non-2xx target responses are reported as failures
    pub status_errors: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ listen: {}, max_body_bytes: {}, connect_timeout: {}s, \
             max_redirects: {}, status_errors: {} }}",
            self.listen,
            self.max_body_bytes,
            self.connect_timeout.as_secs(),
            self.max_redirects,
            self.status_errors,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The listen address does not parse
    /// - `max_body_bytes` is zero
    /// - `connect_timeout` is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let listen = Self::resolve_listen(cli, toml)?;
        let max_body_bytes = Self::resolve_max_body_bytes(cli, toml)?;
        let connect_timeout = Self::resolve_connect_timeout(cli, toml)?;

        let max_redirects = cli
            .max_redirects
            .or_else(|| toml.and_then(|t| t.transport.max_redirects))
            .unwrap_or(defaults::MAX_REDIRECTS);

        // The CLI flag only disables; it cannot re-enable what TOML turned off.
        let status_errors = !cli.no_status_errors
            && toml
                .and_then(|t| t.transport.status_errors)
                .unwrap_or(defaults::STATUS_ERRORS);

        Ok(Self {
            listen,
            max_body_bytes,
            connect_timeout,
            max_redirects,
            status_errors,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_listen(cli: &Cli, toml: Option<&TomlConfig>) -> Result<SocketAddr, ConfigError> {
        let value = cli
            .listen
            .as_deref()
            .or_else(|| toml.and_then(|t| t.server.listen.as_deref()))
            .unwrap_or(defaults::LISTEN);

        value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidListen {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    fn resolve_max_body_bytes(cli: &Cli, toml: Option<&TomlConfig>) -> Result<usize, ConfigError> {
        let bytes = cli
            .max_body_bytes
            .or_else(|| toml.and_then(|t| t.server.max_body_bytes))
            .unwrap_or(defaults::MAX_BODY_BYTES);

        if bytes == 0 {
            return Err(ConfigError::invalid(
                field::MAX_BODY_BYTES,
                "must be greater than 0",
            ));
        }

        Ok(bytes)
    }

    fn resolve_connect_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        let seconds = cli
            .connect_timeout
            .or_else(|| toml.and_then(|t| t.transport.connect_timeout))
            .unwrap_or(defaults::CONNECT_TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::invalid(
                field::CONNECT_TIMEOUT,
                "must be greater than 0",
            ));
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
