//! HTTP hosting for the relay.
//!
//! Every path and every method is routed to the relay so that requests the
//! relay rejects (wrong method included) get the relay's own failure
//! response rather than a framework-generated one.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;

use crate::relay::{Relay, RelayResponse};
use crate::webhook::HttpClient;


impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        // Raw body: no content type is asserted for relayed bytes.
        (self.status, Body::from(self.body)).into_response()
    }
}

/// Builds the router serving `relay`.
///
/// Inbound bodies larger than `max_body_bytes` are refused before they
/// reach the relay.
pub fn router<H>(relay: Arc<Relay<H>>, max_body_bytes: usize) -> Router
where
    H: HttpClient + 'static,
{
    Router::new()
        .fallback(relay_handler::<H>)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(relay)
}

async fn relay_handler<H: HttpClient>(
    State(relay): State<Arc<Relay<H>>>,
    method: Method,
    body: Bytes,
) -> RelayResponse {
    relay.dispatch(&method, &body).await
}

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after the shutdown signal.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Relay listening on {addr}");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
