//! Kirinji order-payment gateway.
//!
//! Turns a client-submitted cart into a verified, signed QR-code payment
//! request against PayPay.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                   GATEWAY                     │
//!  Client Request      │                                               │
//!  ────────────────────┼─▶ origin/CORS ─▶ rate limit ─▶ verify cart    │
//!                      │                                   │           │
//!                      │                                   ▼           │
//!                      │                     catalog re-pricing        │
//!                      │                                   │           │
//!  Client Response     │                                   ▼           │
//!  ◀───────────────────┼── map response ◀── sign (HMAC) ─▶ POST ───────┼──▶ PayPay
//!                      │                                  /v2/qrcode   │
//!                      │  ┌─────────────────────────────────────────┐  │
//!                      │  │  config · observability · error bounds  │  │
//!                      │  └─────────────────────────────────────────┘  │
//!                      └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kirinji_gateway::config::load_config;
use kirinji_gateway::http::HttpServer;
use kirinji_gateway::observability::metrics;

#[derive(Parser)]
#[command(name = "kirinji-gateway")]
#[command(about = "Order-payment gateway for the Kirinji ramen shop", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kirinji_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("kirinji-gateway v0.1.0 starting");

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        provider_base = %config.provider.base_url,
        allowed_origin = %config.app.allowed_origin(),
        rate_limit = config.rate_limit.max_requests,
        credentials_present = config.credentials.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
