//! HTTP server lifecycle: serve the router until shutdown is requested.

use crate::api::{AppState, router};
use crate::core::ProductStore;
use crate::errors::Result;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Serves the product API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn run<F>(listener: TcpListener, store: ProductStore, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(address = %addr, "HTTP server starting");

    let app = router(AppState::new(store));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
