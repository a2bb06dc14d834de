//! The validate, build, execute, classify pipeline.

use http::Method;

use crate::webhook::{HttpClient, HttpRequest};

use super::{RelayError, RelayResponse, build_request, classify, validate};

/// Relays delivery descriptions through an [`HttpClient`].
///
/// The relay holds nothing but its client, so one instance can serve any
/// number of concurrent callers. Each call to [`dispatch`](Self::dispatch)
/// makes at most one outbound request and never retries.
///
/// # Example
///
/// ```no_run
/// use webhook_relay::relay::Relay;
/// use webhook_relay::webhook::ReqwestClient;
///
/// # async fn example() {
/// let relay = Relay::new(ReqwestClient::new());
/// let payload = br#"{"url": "https://example.com/hook", "body": "aGVsbG8="}"#;
/// let response = relay.dispatch(&http::Method::POST, payload).await;
/// println!("{}", response.status);
/// # }
/// ```
#[derive(Debug)]
pub struct Relay<H> {
    client: H,
}

impl<H> Relay<H> {
    /// Creates a relay around the given client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> Relay<H> {
    /// Runs one inbound request through the pipeline.
    ///
    /// Never fails: every path ends in exactly one [`RelayResponse`].
    /// Failures before the outbound call are rendered with status 500.
    pub async fn dispatch(&self, method: &Method, payload: &[u8]) -> RelayResponse {
        let request = match prepare(method, payload) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Rejected delivery: {e}");
                return RelayResponse::failure(e);
            }
        };

        let url = request.target.clone();
        tracing::debug!(
            "Delivering {} byte(s) to {url}",
            request.body.as_ref().map_or(0, Vec::len)
        );

        let outcome = classify(self.client.request(request).await);
        let kind = outcome.kind();
        let response = RelayResponse::render(outcome);

        if response.status.is_success() {
            tracing::info!("Delivered to {url}: {}", response.status);
        } else {
            tracing::warn!(
                "Delivery to {url} ended as {kind} with status {}",
                response.status
            );
        }

        response
    }
}

/// Validate and build stages.
fn prepare(method: &Method, payload: &[u8]) -> Result<HttpRequest, RelayError> {
    let spec = validate(method, payload)?;
    build_request(&spec)
}
