//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// webhook-relay: stateless webhook delivery relay
///
/// Accepts POSTed delivery descriptions, performs the described outbound
/// POST and answers with the target's response.
#[derive(Debug, Parser)]
#[command(name = "webhook-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<String>,

    /// Maximum accepted size of an inbound request body in bytes
    #[arg(long = "max-body-bytes", value_name = "BYTES")]
    pub max_body_bytes: Option<usize>,

    /// Outbound connect timeout in seconds
    #[arg(long = "connect-timeout", value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Maximum number of redirects followed per delivery (0 disables)
    #[arg(long = "max-redirects", value_name = "N")]
    pub max_redirects: Option<usize>,

    /// Pass non-2xx target responses through instead of reporting them as failures
    #[arg(long = "no-status-errors")]
    pub no_status_errors: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for webhook-relay
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "webhook-relay.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
