//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Listen address is not a valid socket address.
    #[error("Invalid listen address '{value}': {reason}")]
    InvalidListen {
        /// The invalid address string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A numeric option is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `InvalidValue` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The inbound body limit.
    pub const MAX_BODY_BYTES: &str = "max_body_bytes";
    /// The outbound connect timeout.
    pub const CONNECT_TIMEOUT: &str = "connect_timeout";
}

impl ConfigError {
    /// Creates an `InvalidValue` error for a field.
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
