//! Translation of a [`WebhookSpec`] into an outbound transport request.

use std::time::Duration;

use http::{HeaderName, HeaderValue};

use crate::webhook::HttpRequest;

use super::{RelayError, WebhookSpec};

/// Builds the outbound POST described by `spec`.
///
/// The body is attached as opaque bytes with no content type; headers are
/// applied exactly as given, and when two names differ only in case the
/// later value replaces the earlier one. The caller's `url` text is kept as
/// the reported target. Nothing is sent here.
///
/// A non-zero `timeout_secs` becomes the request deadline in milliseconds.
/// It bounds the whole exchange (connect, send and read), so it is never
/// looser than a read-only timeout of the same length. Zero leaves the
/// deadline to the transport.
///
/// # Errors
///
/// Returns [`RelayError::InvalidHeader`] if a header name or value cannot
/// be represented on the wire.
pub fn build_request(spec: &WebhookSpec) -> Result<HttpRequest, RelayError> {
    let mut request = HttpRequest::post(spec.url().clone())
        .with_target(spec.target())
        .with_body(spec.body().to_vec());

    for (name, value) in spec.headers() {
        let (name, value) = parse_header(name, value)?;
        request = request.set_header(name, value);
    }

    if spec.timeout_secs() > 0 {
        let millis = u64::from(spec.timeout_secs()) * 1000;
        request = request.with_timeout(Duration::from_millis(millis));
    }

    Ok(request)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), RelayError> {
    let header_name = name
        .parse::<HeaderName>()
        .map_err(|e| RelayError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| RelayError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok((header_name, header_value))
}
