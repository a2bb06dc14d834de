//! Rendering of outcomes and failures into caller responses.

use http::StatusCode;

use super::Outcome;

/// Prefix shared by every failure body.
pub const FAILURE_PREFIX: &str = "Http request failed: ";

/// The status and body written back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    /// Status code for the caller
    pub status: StatusCode,
    /// Body for the caller
    pub body: Vec<u8>,
}

impl RelayResponse {
    /// Renders a classified outcome.
    ///
    /// | outcome | status | body |
    /// |---|---|---|
    /// | success | target's status | target's body |
    /// | status-carrying failure | carried status | prefixed message |
    /// | transport failure | 400 | prefixed message |
    #[must_use]
    pub fn render(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success { status, body } => Self { status, body },
            Outcome::HttpStatusError { status, message } => Self::failed(status, &message),
            Outcome::TransportError { message } => Self::failed(StatusCode::BAD_REQUEST, &message),
        }
    }

    /// Renders a failure that happened before the transport was called.
    #[must_use]
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self::failed(StatusCode::INTERNAL_SERVER_ERROR, &message.to_string())
    }

    fn failed(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: format!("{FAILURE_PREFIX}{message}").into_bytes(),
        }
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
