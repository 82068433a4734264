//! Nonce generation for Publitio API authentication.
//!
//! Every signed request carries a fresh random nonce so a captured
//! payload cannot be replayed.

use rand::Rng;

/// Lower bound of the nonce range (inclusive).
const NONCE_MIN: u64 = 10_000_000;
/// Upper bound of the nonce range (exclusive).
const NONCE_MAX: u64 = 100_000_000;

/// Trait for providing nonces for signed requests.
///
/// The upstream protocol expects an 8-digit decimal value per request,
/// never reused. Implement this to pin nonces in tests.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce for the next request.
    fn next_nonce(&self) -> u64;
}

/// The default nonce provider: a fresh random 8-digit value per request.
///
/// No state is kept between calls; the server rejects replays by
/// nonce/timestamp pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl RandomNonce {
    /// Create a new random nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for RandomNonce {
    fn next_nonce(&self) -> u64 {
        rand::thread_rng().gen_range(NONCE_MIN..NONCE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nonce_in_range() {
        let provider = RandomNonce::new();
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!((10_000_000..=99_999_999).contains(&nonce));
        }
    }

    #[test]
    fn test_nonce_has_eight_digits() {
        let provider = RandomNonce::new();
        for _ in 0..1000 {
            assert_eq!(provider.next_nonce().to_string().len(), 8);
        }
    }

    #[test]
    fn test_repeated_nonces_differ() {
        // 1000 draws from a 9e7-wide range; all-equal is effectively impossible
        let provider = RandomNonce::new();
        let nonces: HashSet<u64> = (0..1000).map(|_| provider.next_nonce()).collect();
        assert!(nonces.len() > 1);
    }
}
