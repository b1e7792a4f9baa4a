//! Application Configuration
//!
//! Configuration for the Auth application layer. Passed explicitly by
//! `Arc`, never read from ambient process state.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing key for HMAC-SHA256 token signatures
    pub signing_key: Vec<u8>,
    /// `iss` claim embedded in issued tokens
    pub issuer: String,
    /// `aud` claim embedded in issued tokens
    pub audience: String,
    /// Token lifetime in minutes
    pub token_ttl_minutes: i64,
}

impl AuthConfig {
    pub fn new(
        signing_key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        token_ttl_minutes: i64,
    ) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            token_ttl_minutes,
        }
    }

    /// Create config with a random signing key (for development)
    ///
    /// Tokens do not survive a restart under this config.
    pub fn development() -> Self {
        Self {
            signing_key: platform::crypto::random_bytes(32),
            issuer: "museum-service".to_string(),
            audience: "museum-clients".to_string(),
            token_ttl_minutes: 60,
        }
    }

    /// Token lifetime in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_minutes * 60
    }
}
