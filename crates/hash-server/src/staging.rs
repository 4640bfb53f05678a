//! Upload staging
//!
//! Uploaded files are written to the staging directory before being read back
//! and streamed through the digest dispatcher. Staged files are keyed by the
//! client-supplied filename with no uniqueness suffix, so a same-named upload
//! overwrites the previous one; this matches the documented API contract.
//! Path components are stripped from the client filename so an upload cannot
//! land outside the staging directory.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use hash_core::{HashResult, Result};

/// Fallback name for uploads whose filename has no usable final component
const DEFAULT_UPLOAD_NAME: &str = "upload";

/// Write uploaded bytes to `<staging_dir>/<basename of filename>`.
///
/// Returns the staged path. An existing file at that path is overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn stage_upload(staging_dir: &Path, filename: &str, contents: &[u8]) -> io::Result<PathBuf> {
    let path = staging_dir.join(staged_name(filename));
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// Open a staged file and stream it through the digest dispatcher.
///
/// The file handle is scoped to this call and closed on every exit path.
///
/// # Errors
///
/// Propagates dispatcher errors and any open/read failure.
pub fn hash_staged(path: &Path, selector: &str) -> Result<Vec<HashResult>> {
    let file = File::open(path)?;
    hash_core::hash_reader(selector, file)
}

/// Reduce a client-supplied filename to a bare file name
fn staged_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_UPLOAD_NAME)
        .to_string()
}
