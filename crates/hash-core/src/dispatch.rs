//! Selector dispatch
//!
//! Maps a caller-supplied selector to digest computation over either an
//! in-memory text buffer or a byte stream.
//!
//! The two paths intentionally differ: the string path supports every
//! algorithm plus the `all` fan-out, while the file path accepts only `md5`.
//! This asymmetry is observable client-facing behavior and must not be
//! widened silently.

use std::io::Read;

use crate::algorithm::HashAlgorithm;
use crate::error::{Error, Result};
use crate::response::HashResult;

/// Selector that fans out to every supported algorithm (string path only)
pub const SELECTOR_ALL: &str = "all";

/// Hash a literal text string.
///
/// For `all`, returns one result per supported algorithm in table order.
/// For a named selector, returns exactly one result. Empty text is valid
/// zero-length input; its UTF-8 bytes (none) are what gets hashed.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`] for any selector outside the
/// supported set, including the empty string. No partial results.
pub fn hash_text(selector: &str, text: &str) -> Result<Vec<HashResult>> {
    if selector == SELECTOR_ALL {
        return Ok(HashAlgorithm::ALL
            .iter()
            .map(|alg| HashResult::compute(*alg, text.as_bytes()))
            .collect());
    }

    let alg = HashAlgorithm::from_selector(selector)
        .ok_or_else(|| Error::unsupported(selector))?;
    Ok(vec![HashResult::compute(alg, text.as_bytes())])
}

/// Hash a byte stream in a single pass.
///
/// Only `md5` is accepted here; every other selector, `all` included, is
/// rejected. The whole stream is consumed with no size cap.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`] for any selector other than
/// `md5`, or [`Error::Io`] if the stream cannot be read.
pub fn hash_reader<R: Read>(selector: &str, reader: R) -> Result<Vec<HashResult>> {
    match HashAlgorithm::from_selector(selector) {
        Some(alg @ HashAlgorithm::Md5) => {
            let digest = alg.digest_reader(reader)?;
            Ok(vec![HashResult::from_digest(alg, &digest)])
        }
        _ => Err(Error::unsupported(selector)),
    }
}
