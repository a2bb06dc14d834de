//! Error types for the relay pipeline stages that run before the transport.

use thiserror::Error;

/// Reasons a caller's delivery description is rejected.
///
/// The display text of each variant is the exact reason shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The inbound method is not POST.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The inbound body is not a JSON object, or `body` is not valid base64.
    #[error("Invalid Request Body")]
    InvalidBody,

    /// The `url` field is absent.
    #[error("Url is missing")]
    UrlMissing,

    /// The `url` field does not look like an http(s) URL.
    #[error("Invalid Request Url")]
    InvalidUrl,

    /// The `body` field is absent.
    #[error("Body is missing")]
    BodyMissing,

    /// The `headers` field is not an object of scalar values.
    #[error("Invalid Request Headers")]
    InvalidHeaders,

    /// The `options` field is not an object.
    #[error("Invalid Request Options")]
    InvalidOptions,

    /// `options.timeout` is not an integer in `[0, 3600]`.
    #[error("Invalid Timeout Value")]
    InvalidTimeout,
}

/// Any failure that happens before the outbound call is attempted.
///
/// All of these are reported to the caller with status 500.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The delivery description failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },
}
