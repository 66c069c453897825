use std::fmt;

use atoll_container::ByteSource;
use sha2::Digest;
use tracing::warn;

use crate::error::{StorageError, StorageResult};
use crate::extent::Extent;

/// Digest algorithm for extent contents. SHA-3-256 is the reference
/// algorithm; SHA-256 is offered for callers standardized on SHA-2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChecksumAlgorithm {
    #[default]
    #[serde(rename = "SHA-3-256")]
    Sha3_256,
    #[serde(rename = "SHA-256")]
    Sha256,
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumAlgorithm::Sha3_256 => f.write_str("SHA-3-256"),
            ChecksumAlgorithm::Sha256 => f.write_str("SHA-256"),
        }
    }
}

/// `(algorithm, hex digest)` pair attached to an extent on request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Checksum {
    #[serde(rename = "type")]
    pub algorithm: ChecksumAlgorithm,
    #[serde(rename = "value")]
    pub digest: String,
}

/// Computes content digests over the exact bytes of an extent.
///
/// The byte source must be exclusively owned by the caller for the duration
/// of a pass; positioned reads on one handle do not interleave safely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumAnnotator {
    algorithm: ChecksumAlgorithm,
}

impl ChecksumAnnotator {
    pub fn new(algorithm: ChecksumAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// Digest the bytes of `extent`. Fails with [`StorageError::ShortRead`]
    /// if the source yields fewer than `extent.size` bytes.
    pub fn annotate(
        &self,
        source: &mut dyn ByteSource,
        extent: &Extent,
    ) -> StorageResult<Checksum> {
        let bytes = source.read_at(extent.file_addr, extent.size)?;
        if bytes.len() as u64 != extent.size {
            warn!(
                offset = extent.file_addr,
                wanted = extent.size,
                got = bytes.len(),
                "short read while checksumming extent"
            );
            return Err(StorageError::ShortRead {
                offset: extent.file_addr,
                wanted: extent.size,
                got: bytes.len() as u64,
            });
        }
        let digest = match self.algorithm {
            ChecksumAlgorithm::Sha3_256 => hex::encode(sha3::Sha3_256::digest(&bytes)),
            ChecksumAlgorithm::Sha256 => hex::encode(sha2::Sha256::digest(&bytes)),
        };
        Ok(Checksum {
            algorithm: self.algorithm,
            digest,
        })
    }
}
