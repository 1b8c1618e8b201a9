//! pay-bridge
//!
//! Bridges payment-provider HTTPS callbacks back into mobile apps.
//!
//! # Architecture Overview
//!
//! ```text
//!   Payment provider                 pay-bridge                         Browser
//!   ────────────────        ┌───────────────────────────────┐
//!   302 → https://host/     │  http::server (axum + tower)  │
//!   pay/bridge?target=      │    request id → trace →       │
//!   myapp://pay&pg_token=…  │    timeout → bridge handler   │
//!          ────────────────▶│             │                 │
//!                           │             ▼                 │
//!                           │  bridge (query → Url → page)  │──▶ meta refresh /
//!                           └───────────────────────────────┘    script redirect to
//!                                                                 myapp://pay?pg_token=…
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pay_bridge::config::{load_config, BridgeConfig};
use pay_bridge::lifecycle::{shutdown_signal, Shutdown};
use pay_bridge::observability::{logging, metrics};
use pay_bridge::HttpServer;

#[derive(Parser)]
#[command(name = "pay-bridge")]
#[command(about = "Redirects payment callbacks to app URL schemes", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pay-bridge starting");
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        bridge_path = %config.bridge.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address.as_str()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server_task => result??,
        _ = shutdown_signal() => {
            shutdown.trigger();
            server_task.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
