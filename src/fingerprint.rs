//! Content fingerprints for uploaded documents.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `bytes`.
///
/// Two uploads with the same fingerprint are treated as the same document.
///
/// # Example
///
/// ```
/// use timesheet_engine::fingerprint::fingerprint;
///
/// assert_eq!(fingerprint(b"abc").len(), 64);
/// assert_eq!(fingerprint(b"abc"), fingerprint(b"abc"));
/// assert_ne!(fingerprint(b"abc"), fingerprint(b"abd"));
/// ```
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
