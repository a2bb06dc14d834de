//! Tests for HTTP request/response types.

use std::time::Duration;

use super::{HttpError, HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
        assert_eq!(req.target, "https://example.com/api");
    }

    #[test]
    fn with_target_keeps_text_as_written() {
        let url = url::Url::parse("http://localhost:8089").unwrap();
        let req = HttpRequest::post(url).with_target("http://localhost:8089");

        assert_eq!(req.url.as_str(), "http://localhost:8089/");
        assert_eq!(req.target, "http://localhost:8089");
    }

    #[test]
    fn post_creates_post_request() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url);

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = b"test body".to_vec();
        let req = HttpRequest::post(url).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn set_header_replaces_earlier_values() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url)
            .set_header(
                http::HeaderName::from_static("x-a"),
                http::HeaderValue::from_static("1"),
            )
            .set_header(
                http::HeaderName::from_static("x-a"),
                http::HeaderValue::from_static("2"),
            );

        assert_eq!(req.headers.get_all("x-a").iter().count(), 1);
        assert_eq!(req.headers["x-a"], "2");
    }

    #[test]
    fn with_timeout_sets_deadline() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url).with_timeout(Duration::from_secs(30));

        assert_eq!(req.timeout, Some(Duration::from_secs(30)));
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_only_for_2xx() {
        let ok = HttpResponse::new(http::StatusCode::CREATED, http::HeaderMap::new(), vec![]);
        let not_found =
            HttpResponse::new(http::StatusCode::NOT_FOUND, http::HeaderMap::new(), vec![]);

        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let body = b"Hello, World!".to_vec();
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), body);

        assert_eq!(resp.body_text(), Some("Hello, World!"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    const TARGET: &str = "http://localhost:8089/throw-exception";

    #[test]
    fn status_error_formats_server_error() {
        let err = HttpError::status_error(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            &http::Method::POST,
            TARGET,
            b"<html><body>Internal Server Error</body></html>",
        );

        assert_eq!(
            err.to_string(),
            "500 Server Error\n\
             POST http://localhost:8089/throw-exception\n\
             <html><body>Internal Server Error</body></html>"
        );
        assert_eq!(err.status(), Some(http::StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn status_error_with_empty_body_has_no_trailing_line() {
        let err = HttpError::status_error(
            http::StatusCode::BAD_GATEWAY,
            &http::Method::POST,
            "http://localhost:8089/x",
            b"",
        );

        assert_eq!(err.to_string(), "502 Server Error\nPOST http://localhost:8089/x");
    }

    #[test]
    fn status_error_reports_target_as_given() {
        let err = HttpError::status_error(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            &http::Method::POST,
            "http://localhost:8089",
            b"oops",
        );

        assert_eq!(
            err.to_string(),
            "500 Server Error\nPOST http://localhost:8089\noops"
        );
    }

    #[test]
    fn status_error_formats_client_error() {
        let err = HttpError::status_error(
            http::StatusCode::NOT_FOUND,
            &http::Method::POST,
            TARGET,
            b"",
        );

        assert!(err.to_string().starts_with("404 Client Error\n"));
    }

    #[test]
    fn status_error_uses_canonical_reason_outside_error_classes() {
        let err = HttpError::status_error(
            http::StatusCode::MOVED_PERMANENTLY,
            &http::Method::POST,
            TARGET,
            b"",
        );

        assert!(err.to_string().starts_with("301 Moved Permanently\n"));
    }

    #[test]
    fn only_status_errors_carry_a_status() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");

        assert!(HttpError::Connection(Box::new(io)).status().is_none());
        assert!(HttpError::Timeout.status().is_none());
        assert!(HttpError::InvalidUrl("x".into()).status().is_none());
    }

    #[test]
    fn connection_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = HttpError::Connection(Box::new(io));

        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Connection error: refused");
    }

    #[test]
    fn timeout_display() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }
}
