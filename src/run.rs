//! Application execution logic.
//!
//! Builds the outbound client from the validated config, binds the
//! listener and serves the relay until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use webhook_relay::config::ValidatedConfig;
use webhook_relay::relay::Relay;
use webhook_relay::server;
use webhook_relay::webhook::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the outbound HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to bind the listen address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an error.
    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Executes the relay server.
///
/// This function:
/// 1. Creates the outbound client from the transport settings
/// 2. Binds the listen address
/// 3. Serves the relay until shutdown signal (Ctrl+C or SIGTERM)
///
/// # Errors
///
/// Returns an error if the client cannot be built, the address cannot be
/// bound, or the server fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = create_client(&config)?;
    let relay = Arc::new(Relay::new(client));

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| RunError::Bind {
            addr: config.listen,
            source,
        })?;

    let app = server::router(relay, config.max_body_bytes);
    server::serve(listener, app, shutdown_signal())
        .await
        .map_err(RunError::Server)?;

    tracing::info!("Relay stopped");
    Ok(())
}

/// Creates the outbound client described by the transport settings.
fn create_client(config: &ValidatedConfig) -> Result<ReqwestClient, RunError> {
    let inner = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .redirect(redirect_policy(config.max_redirects))
        .build()
        .map_err(RunError::ClientBuild)?;

    Ok(ReqwestClient::from_client(inner).with_status_errors(config.status_errors))
}

fn redirect_policy(max_redirects: usize) -> reqwest::redirect::Policy {
    if max_redirects == 0 {
        reqwest::redirect::Policy::none()
    } else {
        reqwest::redirect::Policy::limited(max_redirects)
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, stopping...");
}
