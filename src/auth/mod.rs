//! Authentication module for the Publitio API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - SHA-1 signature generation for signed requests

mod credentials;
mod nonce;
mod payload;
mod signature;

pub use credentials::Credentials;
pub use nonce::{NonceProvider, RandomNonce};
pub use payload::{build_auth_payload, merge_user_payload};
pub use signature::sign;
