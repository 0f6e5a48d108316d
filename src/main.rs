//! RunDeck option provider HTTP server entry point
//!
//! Serves the artifactId and version option endpoints.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rundeck_options::core::config::{Config, LogFormat};
use rundeck_options::core::services::Services;
use rundeck_options::core::xdg::XdgDirs;
use rundeck_options::http;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rundeck_options=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first: it selects the log format
    let config = Config::load()?;
    init_tracing(config.logging.format);

    tracing::info!("Starting RunDeck option provider");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let xdg = XdgDirs::new();
    xdg.log_paths();
    config.log_config();

    // Load the catalog and wire the providers
    let services = Arc::new(Services::new(config.clone())?);

    let app = http::router(services);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
