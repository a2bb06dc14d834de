//! Configuration layer for webhook-relay.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! # Boolean Flag Semantics
//!
//! `--no-status-errors` can only turn status errors off. If the TOML file
//! sets `transport.status_errors = false`, leaving the flag out does not
//! turn them back on.
//!
//! # Scope
//!
//! Configuration only covers hosting and the transport. Everything about an
//! individual delivery (target, body, headers, timeout) comes from the
//! inbound request itself.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
