//! HTTP API for the SAP Bit navigation model.
//!
//! Publishes a fully built [`NavigationModel`] to a rendering layer:
//! - `GET /api/config`: site metadata, theme options and plugins
//! - `GET /api/navbar`: ordered navbar tree
//! - `GET /api/sidebar?path=/rfcs/`: sidebar and active navbar entry for a page
//! - `GET /api/documents`: source documents the navigation references
//!
//! # Architecture
//!
//! ```text
//! sapbit.toml ──► Config::load ──► sapbit_nav::build ──► Arc<NavigationModel>
//!                                                            │
//! Browser ──HTTP──► axum router (sapbit-server) ──read-only──┘
//! ```
//!
//! The model is built before the listener binds, so requests never observe a
//! partially constructed model and handlers read it without locking.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use sapbit_nav::NavigationModel;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Application version reported by `/api/config`.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            version: String::new(),
        }
    }
}

/// Serve `model` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(
    config: ServerConfig,
    model: Arc<NavigationModel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        model,
        version: config.version.clone(),
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded site configuration.
#[must_use]
pub fn server_config_from_config(config: &sapbit_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        version,
    }
}
