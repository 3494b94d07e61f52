//! GIF proxy backend entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gif_proxy::api::{create_router, AppState};
use gif_proxy::config::Config;
use gif_proxy::metrics;
use gif_proxy::utils::shutdown_signal;

/// Backend proxy for the Giphy GIF browser.
#[derive(Parser, Debug)]
#[command(name = "gif-proxy")]
#[command(about = "Proxies trending and search requests to the Giphy API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP listen port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging (structured JSON, matching the frontend's log pipeline)
    let filter = if args.verbose {
        EnvFilter::new("gif_proxy=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(filter)
        .init();

    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = args.port {
        config.port = port;
    }

    // Validate configuration; a missing API key is fatal at startup
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Install Prometheus recorder before any metrics calls
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;
    metrics::init_metrics();

    // Create app state and router
    let state = AppState::new(Arc::new(config.clone()), prometheus);
    let router = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Backend running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
