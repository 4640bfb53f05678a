//! Response entities for the digest service
//!
//! These structs define the JSON wire contract. Field names are renamed to the
//! casing existing clients parse (`Errorcode`, `Hashes`, ...); do not change
//! them without versioning the API.
//!
//! All entities are built per request and discarded after serialization.

use serde::{Deserialize, Serialize};

use crate::algorithm::HashAlgorithm;

/// A single computed digest: lowercase hex plus the selector tag it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    #[serde(rename = "Hash")]
    pub hash: String,

    #[serde(rename = "Type")]
    pub algorithm: String,
}

impl HashResult {
    /// Digest an in-memory buffer with `algorithm`
    pub fn compute(algorithm: HashAlgorithm, data: &[u8]) -> Self {
        Self {
            hash: hex::encode(algorithm.digest(data)),
            algorithm: algorithm.selector().to_string(),
        }
    }

    /// Wrap an already-computed raw digest
    pub fn from_digest(algorithm: HashAlgorithm, digest: &[u8]) -> Self {
        Self {
            hash: hex::encode(digest),
            algorithm: algorithm.selector().to_string(),
        }
    }
}

/// Response body for `POST /string`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringHashResponse {
    #[serde(rename = "Errorcode")]
    pub error_code: u8,

    #[serde(rename = "Errormsg")]
    pub error_message: Option<String>,

    #[serde(rename = "Plaintext")]
    pub input_text: String,

    #[serde(rename = "Hashes")]
    pub results: Vec<HashResult>,
}

impl StringHashResponse {
    pub fn success(input_text: impl Into<String>, results: Vec<HashResult>) -> Self {
        Self {
            error_code: 0,
            error_message: None,
            input_text: input_text.into(),
            results,
        }
    }

    pub fn failure(input_text: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            error_code: 1,
            error_message: Some(error.to_string()),
            input_text: input_text.into(),
            results: Vec::new(),
        }
    }
}

/// Response body for `POST /file`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHashResponse {
    #[serde(rename = "Errorcode")]
    pub error_code: u8,

    #[serde(rename = "Errormsg")]
    pub error_message: Option<String>,

    #[serde(rename = "Filename")]
    pub filename: String,

    #[serde(rename = "Hashes")]
    pub results: Vec<HashResult>,
}

impl FileHashResponse {
    pub fn success(filename: impl Into<String>, results: Vec<HashResult>) -> Self {
        Self {
            error_code: 0,
            error_message: None,
            filename: filename.into(),
            results,
        }
    }

    pub fn failure(filename: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            error_code: 1,
            error_message: Some(error.to_string()),
            filename: filename.into(),
            results: Vec::new(),
        }
    }
}
