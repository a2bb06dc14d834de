//! Tests for outbound request building.

use std::time::Duration;

use http::Method;

use super::{RelayError, WebhookSpec, build_request, validate};

fn spec(payload: &str) -> WebhookSpec {
    validate(&Method::POST, payload.as_bytes()).unwrap()
}

#[test]
fn builds_post_with_decoded_body() {
    let request = build_request(&spec(
        r#"{"url": "https://example.com/hook", "body": "aGVsbG8gd29ybGQ="}"#,
    ))
    .unwrap();

    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.as_str(), "https://example.com/hook");
    assert_eq!(request.body.as_deref(), Some(&b"hello world"[..]));
}

#[test]
fn sets_no_content_type_of_its_own() {
    let request = build_request(&spec(r#"{"url": "http://localhost", "body": ""}"#)).unwrap();

    assert!(request.headers.is_empty());
}

#[test]
fn copies_headers_verbatim() {
    let request = build_request(&spec(
        r#"{"url": "http://localhost", "body": "",
            "headers": {"Content-Type": "application/json", "Accept": " application/json "}}"#,
    ))
    .unwrap();

    assert_eq!(request.headers.len(), 2);
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(request.headers["accept"], "application/json");
}

#[test]
fn caller_url_text_is_kept_as_target() {
    let request = build_request(&spec(r#"{"url": "http://localhost:8089", "body": ""}"#)).unwrap();

    assert_eq!(request.target, "http://localhost:8089");
    assert_eq!(request.url.as_str(), "http://localhost:8089/");
}

#[test]
fn header_names_differing_in_case_keep_last_value() {
    let request = build_request(&spec(
        r#"{"url": "http://localhost", "body": "", "headers": {"X-A": "1", "x-a": "2"}}"#,
    ))
    .unwrap();

    assert_eq!(request.headers.get_all("x-a").iter().count(), 1);
    assert_eq!(request.headers["x-a"], "2");
}

#[test]
fn timeout_is_converted_to_milliseconds() {
    let request = build_request(&spec(
        r#"{"url": "http://localhost", "body": "", "options": {"timeout": 30}}"#,
    ))
    .unwrap();

    assert_eq!(request.timeout, Some(Duration::from_millis(30_000)));
}

#[test]
fn zero_timeout_defers_to_transport() {
    let request = build_request(&spec(
        r#"{"url": "http://localhost", "body": "", "options": {"timeout": 0}}"#,
    ))
    .unwrap();

    assert!(request.timeout.is_none());
}

#[test]
fn illegal_header_name_is_rejected() {
    let result = build_request(&spec(
        r#"{"url": "http://localhost", "body": "", "headers": {"Bad Header": "x"}}"#,
    ));

    assert!(matches!(
        result,
        Err(RelayError::InvalidHeader { ref name, .. }) if name == "Bad Header"
    ));
}

#[test]
fn illegal_header_value_is_rejected() {
    let result = build_request(&spec(
        r#"{"url": "http://localhost", "body": "", "headers": {"X-Line": "a\nb"}}"#,
    ));

    assert!(matches!(result, Err(RelayError::InvalidHeader { .. })));
}
