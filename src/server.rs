//! HTTP server startup
//!
//! Builds the tokio runtime, binds the listener and serves the ledger router
//! until Ctrl-C is received.

use crate::api;
use crate::core::Ledger;
use crate::types::LedgerError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Configuration for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: SocketAddr,
    /// Number of runtime worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with custom values
    ///
    /// A worker count of zero is replaced by the default.
    pub fn new(bind_addr: SocketAddr, workers: usize) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            warn!(
                workers,
                default = default.workers,
                "invalid worker count, using default"
            );
            default.workers
        } else {
            workers
        };

        Self { bind_addr, workers }
    }
}

/// Run the server on a dedicated multi-threaded runtime
///
/// Blocks until the server shuts down.
///
/// # Errors
///
/// Returns `LedgerError::IoError` if the runtime cannot be built, the address
/// cannot be bound, or serving fails.
pub fn serve(config: ServerConfig, ledger: Arc<Ledger>) -> Result<(), LedgerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()?;

    info!(workers = config.workers, "runtime started");
    runtime.block_on(run(config.bind_addr, ledger))
}

/// Bind `bind_addr` and serve the ledger router on the current runtime
pub async fn run(bind_addr: SocketAddr, ledger: Arc<Ledger>) -> Result<(), LedgerError> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, api::router(ledger))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until the process is killed.
            warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
