//! The validated description of one webhook delivery.

use url::Url;

/// A validated webhook delivery.
///
/// Instances only come out of [`validate`](super::validate); fields are
/// private and exposed read-only, so a `WebhookSpec` never changes after
/// validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSpec {
    target: String,
    url: Url,
    body: Vec<u8>,
    headers: Vec<(String, String)>,
    timeout_secs: u32,
}

impl WebhookSpec {
    /// Largest accepted `options.timeout`, in seconds.
    pub const MAX_TIMEOUT_SECS: u32 = 3600;

    pub(super) const fn new(
        target: String,
        url: Url,
        body: Vec<u8>,
        headers: Vec<(String, String)>,
        timeout_secs: u32,
    ) -> Self {
        Self {
            target,
            url,
            body,
            headers,
            timeout_secs,
        }
    }

    /// The `url` field exactly as the caller sent it.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Target of the delivery, parsed.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Decoded request body, sent verbatim.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Extra headers in the order the caller gave them, values trimmed.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Read timeout in seconds. Zero means the transport default applies.
    #[must_use]
    pub const fn timeout_secs(&self) -> u32 {
        self.timeout_secs
    }
}
