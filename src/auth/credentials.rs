//! Credential management for Publitio API authentication.

use secrecy::{ExposeSecret, SecretString};

/// API credentials containing the key and secret.
///
/// Immutable once constructed and owned by a single client instance.
/// Both values are shown on the Publitio dashboard under API settings.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier, sent as `api_key`)
    pub api_key: String,
    /// The API secret (private, only ever fed into the signature)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read credentials from `PUBLITIO_API_KEY` and `PUBLITIO_API_SECRET`.
    ///
    /// Returns `None` if either variable is not set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("PUBLITIO_API_KEY").ok()?;
        let api_secret = std::env::var("PUBLITIO_API_SECRET").ok()?;
        Some(Self::new(api_key, api_secret))
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_credentials_expose_secret() {
        let creds = Credentials::new("key", "secret");
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }
}
