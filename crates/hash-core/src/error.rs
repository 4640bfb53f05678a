//! Error types for hash-core

/// Result type for hash-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while dispatching a digest request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller named a selector outside the supported set
    #[error("Hash type {selector} is not supported")]
    UnsupportedAlgorithm { selector: String },

    /// The byte source could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unsupported(selector: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            selector: selector.into(),
        }
    }
}
