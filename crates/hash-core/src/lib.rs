//! Digest dispatch for the gethashes service
//!
//! Maps a caller-supplied selector (`md5`, `sha1`, ..., `all`) to one or more
//! hex-encoded digests over an in-memory string or a byte stream, and defines
//! the JSON response entities the HTTP layer serializes.

pub mod algorithm;
pub mod dispatch;
pub mod error;
pub mod response;

pub use algorithm::HashAlgorithm;
pub use dispatch::{SELECTOR_ALL, hash_reader, hash_text};
pub use error::{Error, Result};
pub use response::{FileHashResponse, HashResult, StringHashResponse};
