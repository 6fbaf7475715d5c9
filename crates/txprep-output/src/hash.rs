//! Content digests for written outputs.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`, as recorded in the run report.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
