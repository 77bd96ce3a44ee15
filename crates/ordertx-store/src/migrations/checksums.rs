//! Checksums of migration SQL, recorded when a migration is applied

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 of a migration's SQL
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
