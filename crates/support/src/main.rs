//! Coral Bay Support - customer-service tool backend.
//!
//! This binary serves the support tool surface on port 3002.
//!
//! # Architecture
//!
//! - Axum web framework
//! - In-memory entity store (customers, orders, tickets)
//! - Lifecycle engines enforcing order/ticket state transitions
//! - Tool executor dispatching named operations with JSON arguments
//!
//! State lives only in process memory: the demo data set is seeded at
//! startup (unless `SUPPORT_SEED_DEMO_DATA=false`) and nothing survives a
//! restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use coralbay_support::config::SupportConfig;
use coralbay_support::routes;
use coralbay_support::state::AppState;
use coralbay_support::store::{EntityStore, seed::seed_demo_data};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = SupportConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coralbay_support=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build the entity store
    let store = EntityStore::new();
    if config.seed_demo_data {
        seed_demo_data(&store);
        tracing::info!("Seeded demo data set");
    }

    let addr = config.socket_addr();
    let state = AppState::new(config, store);

    // Build router
    let app = routes::router()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", u64::try_from(latency.as_millis()).unwrap_or(u64::MAX));
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state);

    tracing::info!("support listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
