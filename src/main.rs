use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use yatra_rs::{
    create_app, handlers::RequestLimits, init_observability, repositories::MemStorage,
    shutdown_observability, Config, Metrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (basic logging only)
    let config = Config::from_environment().context("Failed to load configuration")?;
    println!("Configuration loaded successfully");

    init_observability(&config.observability.settings())
        .context("Failed to initialize observability")?;

    info!("Starting yatra-rs service");
    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let metrics = Arc::new(Metrics::new().context("Failed to register metrics")?);
    info!("Metrics initialized successfully");

    // Seeds the catalog; state lives for the lifetime of the process
    let storage = Arc::new(MemStorage::new());
    info!("Store initialized successfully");

    let app = create_app(
        storage,
        metrics,
        RequestLimits {
            max_request_size: config.server.max_request_size,
        },
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    // Set up graceful shutdown
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
        shutdown_observability().await;
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
