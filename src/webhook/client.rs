//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. It inherits reqwest's default configuration
/// including connection pooling and redirect handling.
///
/// By default non-2xx responses are reported as [`HttpError::Status`]
/// rather than returned as responses. Use
/// [`with_status_errors(false)`](Self::with_status_errors) to hand every
/// completed round trip back as an [`HttpResponse`].
///
/// # Example
///
/// ```no_run
/// use webhook_relay::webhook::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://api.example.com/webhook")?;
/// let request = HttpRequest::post(url).with_body(b"hello".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    status_errors: bool,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (connect timeouts, redirects, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            status_errors: true,
        }
    }

    /// Sets whether non-2xx responses are reported as [`HttpError::Status`].
    #[must_use]
    pub const fn with_status_errors(mut self, enabled: bool) -> Self {
        self.status_errors = enabled;
        self
    }

    /// Returns true if non-2xx responses are reported as errors.
    #[must_use]
    pub const fn status_errors(&self) -> bool {
        self.status_errors
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Sent to the parsed url; `target` only appears in failure messages.
        let mut builder = self.inner.request(req.method.clone(), req.url.clone());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = req.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        if self.status_errors && !status.is_success() {
            return Err(HttpError::status_error(status, &req.method, &req.target, &body));
        }

        Ok(HttpResponse::new(status, headers, body))
    }
}
