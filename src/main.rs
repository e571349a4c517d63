//! events-gateway server entry point.
//!
//! Loads configuration, opens the configured storage driver, and serves
//! the REST API until the process is stopped.

use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use events_gateway::api;
use events_gateway::app_state::AppState;
use events_gateway::bootstrap;
use events_gateway::config::{LogFormat, ServiceConfig};
use events_gateway::service::EventService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    tracing::info!(
        addr = %config.listen_addr,
        backend = %config.store_backend,
        "starting events-gateway"
    );

    // Open storage driver; failure here stops the process before serving
    let store = match bootstrap::open_store(&config).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(backend = %config.store_backend, error = %err, "storage unavailable");
            return Err(err).context("failed to open storage backend");
        }
    };

    // Build application state
    let app_state = AppState::new(EventService::new(store));

    // Build router
    let app = api::build_app(
        app_state,
        Duration::from_secs(config.request_timeout_secs),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
