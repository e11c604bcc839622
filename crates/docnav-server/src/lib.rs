//! HTTP API serving the composed docnav site configuration.
//!
//! Endpoints:
//! - `GET /api/config`: framework configuration object
//! - `GET /api/navigation`: resolved nav bar
//! - `GET /api/sidebar/{*path}`: sidebar selected for a page path
//! - `GET /api/pages/{*path}`: page context (sidebar, edit URL, comments)
//!
//! The site is loaded once before the server starts and shared read-only
//! across handlers.
//!
//! # Quick Start
//!
//! ```ignore
//! use docnav_config::Config;
//! use docnav_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     let metadata = config.load_project_metadata().unwrap();
//!     let server_config = server_config_from_config(&config);
//!
//!     run_server(server_config, config.site, &metadata).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use docnav_site::{ProjectMetadata, SiteDefinition};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory (page frontmatter is read from here).
    pub source_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from("docs"),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound or
/// the site cannot be serialized.
pub async fn run_server(
    config: ServerConfig,
    site: SiteDefinition,
    metadata: &ProjectMetadata,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(site, metadata, config.source_dir)?);
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docnav config.
#[must_use]
pub fn server_config_from_config(config: &docnav_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
    }
}
