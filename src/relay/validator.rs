//! Validation of inbound delivery descriptions.
//!
//! Checks run in a fixed order and the first failing check decides the
//! reason reported to the caller.

use std::sync::LazyLock;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use http::Method;
use regex::Regex;
use serde_json::{Map, Value};
use url::Url;

use super::{ValidationError, WebhookSpec};

/// Top-level payload field names.
pub mod field {
    /// Target URL.
    pub const URL: &str = "url";
    /// Base64-encoded request body.
    pub const BODY: &str = "body";
    /// Optional header object.
    pub const HEADERS: &str = "headers";
    /// Optional options object.
    pub const OPTIONS: &str = "options";
    /// Read timeout inside `options`, in seconds.
    pub const TIMEOUT: &str = "timeout";
}

/// Scheme, a host without ports or slashes, an optional port, then path segments.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(http|https)://([^:/\s]+)(:\d+)?(/[^/\s]*)*$").expect("URL pattern is valid")
});

/// Standard alphabet, padding optional, lenient about trailing bits.
const BODY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Validates a raw inbound request and projects it into a [`WebhookSpec`].
///
/// # Errors
///
/// Returns the first [`ValidationError`] hit, in this order: method, JSON
/// object, `url` presence, `url` pattern, `body` presence, `body` base64,
/// `headers`, `options`, `options.timeout`.
pub fn validate(method: &Method, payload: &[u8]) -> Result<WebhookSpec, ValidationError> {
    if method != Method::POST {
        return Err(ValidationError::MethodNotAllowed);
    }

    let fields = parse_object(payload)?;
    let (target, url) = parse_url(&fields)?;
    let body = decode_body(&fields)?;
    let headers = parse_headers(&fields)?;
    let timeout_secs = parse_timeout(&fields)?;

    Ok(WebhookSpec::new(target, url, body, headers, timeout_secs))
}

fn parse_object(payload: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => Ok(fields),
        _ => Err(ValidationError::InvalidBody),
    }
}

fn parse_url(fields: &Map<String, Value>) -> Result<(String, Url), ValidationError> {
    let value = fields.get(field::URL).ok_or(ValidationError::UrlMissing)?;
    let raw = value.as_str().ok_or(ValidationError::InvalidUrl)?;

    if !URL_PATTERN.is_match(raw) {
        return Err(ValidationError::InvalidUrl);
    }

    // The pattern admits a few hosts the URL parser still refuses.
    let url = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)?;
    Ok((raw.to_string(), url))
}

fn decode_body(fields: &Map<String, Value>) -> Result<Vec<u8>, ValidationError> {
    let value = fields.get(field::BODY).ok_or(ValidationError::BodyMissing)?;
    let encoded = value.as_str().ok_or(ValidationError::InvalidBody)?;

    BODY_ENGINE
        .decode(encoded)
        .map_err(|_| ValidationError::InvalidBody)
}

fn parse_headers(fields: &Map<String, Value>) -> Result<Vec<(String, String)>, ValidationError> {
    let Some(value) = fields.get(field::HEADERS) else {
        return Ok(Vec::new());
    };
    let headers = value.as_object().ok_or(ValidationError::InvalidHeaders)?;

    headers
        .iter()
        .map(|(name, value)| {
            let text = header_text(value).ok_or(ValidationError::InvalidHeaders)?;
            Ok((name.clone(), text.trim().to_string()))
        })
        .collect()
}

/// Coerces a scalar JSON value to its header text.
fn header_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_timeout(fields: &Map<String, Value>) -> Result<u32, ValidationError> {
    let Some(value) = fields.get(field::OPTIONS) else {
        return Ok(0);
    };
    let options = value.as_object().ok_or(ValidationError::InvalidOptions)?;

    let Some(timeout) = options.get(field::TIMEOUT) else {
        return Ok(0);
    };

    timeout
        .as_i64()
        .and_then(|secs| u32::try_from(secs).ok())
        .filter(|secs| *secs <= WebhookSpec::MAX_TIMEOUT_SECS)
        .ok_or(ValidationError::InvalidTimeout)
}
