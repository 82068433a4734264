//! SHA-1 signature generation for Publitio API authentication.
//!
//! Every signed request carries:
//!
//! ```text
//! api_signature = hex(sha1(timestamp + nonce + secret))
//! ```
//!
//! The concatenation order and the absence of a delimiter are a wire
//! contract with the server. Timestamp and nonce are fixed-format decimal
//! strings, so the field boundaries are unambiguous.

use sha1::{Digest, Sha1};

/// Sign a request with the API secret.
///
/// `timestamp` and `nonce` are the decimal string forms sent in the
/// `api_timestamp` and `api_nonce` query parameters. Returns the
/// lowercase hex digest sent as `api_signature`.
pub fn sign(secret: &str, timestamp: &str, nonce: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(nonce.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
