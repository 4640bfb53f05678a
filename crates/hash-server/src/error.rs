//! Error types for the HTTP server

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while starting or running the server.
///
/// Per-request failures never appear here; those are captured into the
/// response body's `Errorcode`/`Errormsg` fields and served with HTTP 200.
#[derive(Debug, Error)]
pub enum Error {
    /// Could not create the staging directory
    #[error("failed to create staging directory {path}: {source}")]
    StagingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not bind or serve on the configured address
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
