//! Spoken Time API Server
//!
//! HTTP front end that turns 24-hour clock times into spoken British
//! English, e.g. `07:30` becomes `"half past seven"`.
//!
//! # Architecture
//!
//! The server is built on Axum and follows a layered architecture:
//!
//! - **Routes**: HTTP endpoint definitions and the middleware stack
//! - **Handlers**: Request binding and response shaping
//! - **Services**: Conversion logic on top of `spoken-time-core`
//! - **Middleware**: Request logging
//!
//! # Endpoints
//!
//! - `GET /api/v1/spoken-time?time=HH:mm`
//! - `GET /api/v1/spoken-time/{hour}/{minute}`
//! - `POST /api/v1/spoken-time/upload`
//! - `GET /internal/health`, `/internal/health/live`, `/internal/health/ready`

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{load_config, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use routes::create_router;
pub use state::AppState;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Server builder for constructing and running the API server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self, anyhow::Error> {
        let state = AppState::new(&config)?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone())
    }

    /// Run the server, binding to the configured address.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr).await?;

        info!(
            %addr,
            default_locale = %self.config.formatter.default_locale,
            "Server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown");
}
