//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS (the frontend is served from another origin)
//! - Tracing middleware and per-request timeout
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Flat directory holding uploaded resume files.
    pub uploads_dir: PathBuf,
}

/// Build the router with all routes and middleware.
pub fn build_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(routes::root::router())
        .merge(routes::portfolio::router())
        .merge(routes::resume::router())
        .merge(routes::contact::router())
        .merge(routes::analytics::router());

    Router::new()
        .merge(routes::health::router())
        .nest("/api", api)
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until shutdown.
pub async fn run_server(
    pool: PgPool,
    addr: SocketAddr,
    uploads_dir: PathBuf,
    request_timeout: Duration,
) -> Result<(), ServerError> {
    let state = Arc::new(AppState { pool, uploads_dir });
    let app = build_router(state, request_timeout);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    // ConnectInfo gives analytics a peer address to fall back on.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
