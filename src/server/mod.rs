//! HTTP server exposing the probe and metrics endpoints
//!
//! # Endpoints
//!
//! - `GET /` - Landing page
//! - `GET /metrics` - Process metrics from the default Prometheus registry
//! - `GET /probe?repo=owner/name&tag=v1.2.3` - Probe a repository

pub mod handlers;
pub mod metrics;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::config::ExporterConfig;
use crate::version::checker::VersionChecker;
use crate::version::github::GitHubFetcher;

pub use handlers::AppState;

/// Build the router with all endpoints
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/metrics", get(handlers::metrics))
        .route("/probe", get(handlers::probe))
        .with_state(state)
}

/// Start the exporter and serve until a shutdown signal arrives
pub async fn run_server(config: ExporterConfig) -> anyhow::Result<()> {
    info!("Starting version-exporter {}", env!("CARGO_PKG_VERSION"));

    if config.github.token.is_some() {
        info!("Authenticating GitHub API requests with the configured token");
    } else {
        warn!("No GitHub token configured, API requests are subject to anonymous rate limits");
    }

    let fetcher = GitHubFetcher::new(&config.github).context("failed to create HTTP client")?;
    let checker = VersionChecker::new(Arc::new(fetcher));
    let state = Arc::new(AppState::new(checker).context("failed to create probe metrics")?);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running server")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
