//! HTTP server binary for the task API.
//!
//! Reads bind configuration from the environment, wires the in-memory
//! repository to the CRUD service, and serves the REST surface until the
//! process is interrupted.

use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::ServerConfig;
use taskboard::http::{AppState, build_router};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskCrudService;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = Arc::new(TaskCrudService::new(repository));
    let app = build_router(AppState::new(service, Arc::new(DefaultClock)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "task API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolves when the process receives an interrupt.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
