//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, origin/CORS, rate limit)
//! - Bind the server to a listener
//! - Graceful shutdown on Ctrl+C

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::Request,
    middleware,
    response::Response,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::config::GatewayConfig;
use crate::http::payment::{create_payment, preflight};
use crate::http::request::MakeRequestUuid;
use crate::observability::metrics;
use crate::payment::ProviderClient;
use crate::security::origin::origin_middleware;
use crate::security::rate_limit::{rate_limit_middleware, RateLimiter};

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub limiter: Arc<RateLimiter>,
    pub provider: ProviderClient,
    pub config: Arc<GatewayConfig>,
    pub allowed_origin: Arc<str>,
}

/// HTTP server for the payment gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let config = Arc::new(config);

        // Initialize subsystems
        let catalog = Arc::new(Catalog::from_menu());
        let limiter = Arc::new(RateLimiter::new(&config.rate_limit));
        let provider = ProviderClient::new(
            config.provider.base_url.clone(),
            Duration::from_secs(config.provider.timeout_secs),
        )?;
        let allowed_origin: Arc<str> = Arc::from(config.app.allowed_origin());

        let state = AppState {
            catalog,
            limiter,
            provider,
            config: config.clone(),
            allowed_origin,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        // Top of the builder is outermost: request ids and tracing wrap
        // everything, then the timeout, then the admission checks. Origin
        // policy runs before the rate limiter, which runs before parsing.
        Router::new()
            .route("/api/payment", post(create_payment).options(preflight))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(middleware::from_fn(track_metrics))
                    .layer(middleware::from_fn_with_state(
                        state.clone(),
                        origin_middleware,
                    ))
                    .layer(middleware::from_fn_with_state(
                        state.clone(),
                        rate_limit_middleware,
                    )),
            )
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Record status and latency for every request.
async fn track_metrics(request: Request<Body>, next: axum::middleware::Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    metrics::record_request(&method, response.status().as_u16(), start);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
