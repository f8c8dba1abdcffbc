//! Checksum calculation for plan request identity.
//!
//! Two requests with the same checksum produce the same plan (the allocator
//! is deterministic), so the checksum doubles as a stable plan fingerprint
//! for callers that correlate results across calls.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of plan request JSON content.
///
/// # Arguments
/// * `content` - JSON string content of the plan request
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
