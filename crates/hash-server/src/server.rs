//! HTTP server assembly
//!
//! Builds the axum router for the digest service and runs it on a bound
//! listener. Each request is self-contained; the only state shared between
//! in-flight requests is the staging directory namespace.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::handlers;

/// Server configuration, assembled from CLI arguments
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub bind: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Directory uploads are staged to before digesting
    pub staging_dir: PathBuf,

    /// Directory holding the landing page and `/img` assets
    pub assets_dir: PathBuf,
}

/// Shared request-handler state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory uploads are staged to
    pub staging_dir: PathBuf,
}

/// HTTP server for the digest service
pub struct HashServer {
    config: ServerConfig,
}

impl HashServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the configured address and serve until the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging directory cannot be created or the
    /// listener cannot be bound.
    pub async fn run(self) -> Result<()> {
        std::fs::create_dir_all(&self.config.staging_dir).map_err(|source| {
            Error::StagingDir {
                path: self.config.staging_dir.clone(),
                source,
            }
        })?;

        let addr = SocketAddr::new(self.config.bind, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, staging = %self.config.staging_dir.display(), "gethashes listening");

        let app = router(
            AppState {
                staging_dir: self.config.staging_dir.clone(),
            },
            &self.config.assets_dir,
        );
        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Build the service router.
///
/// Separate from [`HashServer::run`] so tests can drive the router without
/// binding a socket. The body limit is lifted on upload routes: an
/// arbitrarily large file is hashed in full.
pub fn router(state: AppState, assets_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/string", post(handlers::string_hash))
        .route("/file", post(handlers::file_hash))
        .route_service("/", ServeFile::new(assets_dir.join("index.html")))
        .nest_service("/img", ServeDir::new(assets_dir.join("img")))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
