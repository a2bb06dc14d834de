//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Separates failures that still carry an HTTP status (the target answered,
/// but the transport treats the status as exceptional) from failures where
/// no interpretable response exists at all.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The round trip completed but the status is treated as an error.
    ///
    /// The message embeds the status line, the request line and the
    /// response body, see [`HttpError::status_error`].
    #[error("{message}")]
    Status {
        /// Status code returned by the target
        status: http::StatusCode,
        /// Formatted description of the failed exchange
        message: String,
    },

    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, TLS handshake failures,
    /// connection resets and bodies that end before their declared length.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates the transport refused to build the request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Creates a [`HttpError::Status`] for a response the transport rejects.
    ///
    /// The message reads `<code> <phrase>` then `<METHOD> <target>` on the
    /// next line. A non-empty response body follows on a third line, decoded
    /// lossily as UTF-8.
    #[must_use]
    pub fn status_error(
        status: http::StatusCode,
        method: &http::Method,
        target: &str,
        body: &[u8],
    ) -> Self {
        let mut message = format!(
            "{} {}\n{method} {target}",
            status.as_u16(),
            status_phrase(status),
        );
        if !body.is_empty() {
            message.push('\n');
            message.push_str(&String::from_utf8_lossy(body));
        }
        Self::Status { status, message }
    }

    /// Returns the HTTP status carried by this error, if any.
    ///
    /// Only [`HttpError::Status`] carries one.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Connection(_) | Self::Timeout | Self::InvalidUrl(_) => None,
        }
    }
}

/// Status class phrase used in status error messages.
fn status_phrase(status: http::StatusCode) -> &'static str {
    if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else {
        status.canonical_reason().unwrap_or("Unknown Status")
    }
}
