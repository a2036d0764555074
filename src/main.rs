use std::path::PathBuf;

use tokio::net::TcpListener;

use placeholder_gateway::config;
use placeholder_gateway::http::GatewayServer;
use placeholder_gateway::lifecycle::{signals, Shutdown};
use placeholder_gateway::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("placeholder-gateway starting");

    let config_path = config_path();
    let config = config::load_config(config_path.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        tracing::info!("shutdown requested");
        shutdown.trigger();
    });

    let server = GatewayServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Explicit `GATEWAY_CONFIG` path, else `gateway.toml` when present.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("GATEWAY_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from("gateway.toml");
    default.exists().then_some(default)
}
