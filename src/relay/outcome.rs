//! Classification of transport results.

use crate::webhook::{HttpError, HttpResponse};

/// The classified result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The transport returned a response, whatever its status.
    Success {
        /// Status returned by the target
        status: http::StatusCode,
        /// Response body as received
        body: Vec<u8>,
    },

    /// The transport failed with an error that still carries a status.
    HttpStatusError {
        /// Status carried by the failure
        status: http::StatusCode,
        /// The failure's description
        message: String,
    },

    /// The transport failed without an interpretable response.
    TransportError {
        /// The failure's description
        message: String,
    },
}

impl Outcome {
    /// Returns a short tag for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::HttpStatusError { .. } => "http-status-error",
            Self::TransportError { .. } => "transport-error",
        }
    }
}

/// Classifies a transport result.
///
/// The deciding signal for failures is whether the error carries a status:
/// [`HttpError::Status`] becomes [`Outcome::HttpStatusError`], every other
/// error becomes [`Outcome::TransportError`].
#[must_use]
pub fn classify(result: Result<HttpResponse, HttpError>) -> Outcome {
    match result {
        Ok(response) => Outcome::Success {
            status: response.status,
            body: response.body,
        },
        Err(error) => match error.status() {
            Some(status) => Outcome::HttpStatusError {
                status,
                message: error.to_string(),
            },
            None => Outcome::TransportError {
                message: error.to_string(),
            },
        },
    }
}
