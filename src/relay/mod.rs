//! Relay pipeline turning a delivery description into an outbound POST.
//!
//! Stages, in order:
//! - Validation of the inbound request ([`validate`] producing a [`WebhookSpec`])
//! - Building the outbound request ([`build_request`])
//! - Executing it through an [`HttpClient`](crate::webhook::HttpClient)
//! - Classifying the result ([`classify`] producing an [`Outcome`])
//! - Rendering the caller response ([`RelayResponse`])
//!
//! [`Relay`] runs the stages and turns any failure before the outbound call
//! into a status 500 response.

mod builder;
mod dispatcher;
mod error;
mod outcome;
mod response;
mod spec;
pub mod validator;

#[cfg(test)]
mod builder_tests;

pub use builder::build_request;
pub use dispatcher::Relay;
pub use error::{RelayError, ValidationError};
pub use outcome::{Outcome, classify};
pub use response::{FAILURE_PREFIX, RelayResponse};
pub use spec::WebhookSpec;
pub use validator::validate;
