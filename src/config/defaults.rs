//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default listen address for the relay server.
pub const LISTEN: &str = "127.0.0.1:8080";

/// Default limit for inbound request bodies (2 MiB).
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Default outbound connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default number of redirects followed for an outbound delivery.
pub const MAX_REDIRECTS: usize = 10;

/// Whether non-2xx target responses are treated as transport errors by default.
pub const STATUS_ERRORS: bool = true;

/// Default connect timeout as Duration.
#[must_use]
pub const fn connect_timeout() -> Duration {
    Duration::from_secs(CONNECT_TIMEOUT_SECS)
}
