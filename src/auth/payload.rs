//! Authenticated payload construction.
//!
//! Every signed request carries four auth query parameters: `api_key`,
//! `api_timestamp`, `api_nonce` and `api_signature`. The nonce and
//! timestamp are generated fresh for each request and the signature is
//! derived from exactly that pair, so a captured payload cannot be
//! replayed later.

use time::OffsetDateTime;

use crate::auth::{Credentials, NonceProvider, sign};
use crate::types::Params;

/// Current UTC time as Unix-epoch seconds.
fn current_unix_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Build the four auth parameters for one request.
///
/// A fresh nonce and timestamp are drawn per call; nothing is cached
/// across requests.
pub fn build_auth_payload(credentials: &Credentials, nonces: &dyn NonceProvider) -> Params {
    let timestamp = current_unix_timestamp().to_string();
    let nonce = nonces.next_nonce().to_string();
    let signature = sign(credentials.expose_secret(), &timestamp, &nonce);

    Params::new()
        .set("api_key", credentials.api_key.clone())
        .set("api_timestamp", timestamp)
        .set("api_nonce", nonce)
        .set("api_signature", signature)
}

/// Overlay caller parameters onto an auth payload.
///
/// Caller keys take precedence on collision.
pub fn merge_user_payload(auth: Params, user: &Params) -> Params {
    let mut merged = auth;
    for (name, value) in user.iter() {
        merged.insert(name, value);
    }
    merged
}
