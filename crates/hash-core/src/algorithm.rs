//! Digest algorithm table
//!
//! Maps selector strings to the fixed set of supported digest algorithms and
//! provides one-shot and streaming digest computation over each.

use std::io::Read;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// Buffer size for streaming digests over a reader
const READ_BUF_SIZE: usize = 64 * 1024;

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512Trunc224,
    Sha512Trunc256,
}

impl HashAlgorithm {
    /// Every supported algorithm, in the order `all` reports them
    pub const ALL: [Self; 8] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512Trunc224,
        Self::Sha512Trunc256,
    ];

    /// Resolve a selector string to an algorithm
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "md5" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "sha224" => Some(Self::Sha224),
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            "sha512_224" => Some(Self::Sha512Trunc224),
            "sha512_256" => Some(Self::Sha512Trunc256),
            _ => None,
        }
    }

    /// The selector tag reported back to clients
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512Trunc224 => "sha512_224",
            Self::Sha512Trunc256 => "sha512_256",
        }
    }

    /// Raw digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512Trunc224 => 28,
            Self::Sha256 | Self::Sha512Trunc256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Compute the digest of an in-memory byte buffer
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(data).to_vec(),
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
            Self::Sha512Trunc224 => Sha512_224::digest(data).to_vec(),
            Self::Sha512Trunc256 => Sha512_256::digest(data).to_vec(),
        }
    }

    /// Compute the digest of a byte stream in a single pass.
    ///
    /// The whole stream is consumed; no size limit is enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails.
    pub fn digest_reader<R: Read>(&self, reader: R) -> std::io::Result<Vec<u8>> {
        match self {
            Self::Md5 => stream_digest::<Md5, R>(reader),
            Self::Sha1 => stream_digest::<Sha1, R>(reader),
            Self::Sha224 => stream_digest::<Sha224, R>(reader),
            Self::Sha256 => stream_digest::<Sha256, R>(reader),
            Self::Sha384 => stream_digest::<Sha384, R>(reader),
            Self::Sha512 => stream_digest::<Sha512, R>(reader),
            Self::Sha512Trunc224 => stream_digest::<Sha512_224, R>(reader),
            Self::Sha512Trunc256 => stream_digest::<Sha512_256, R>(reader),
        }
    }
}

fn stream_digest<D: Digest, R: Read>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut hasher = D::new();
    let mut buf = [0u8; READ_BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_vec())
}
