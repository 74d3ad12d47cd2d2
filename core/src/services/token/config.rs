//! Token service configuration

use ob_shared::config::JwtConfig;

/// Configuration for JWT signing and lifetime.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC secret used to sign tokens
    pub secret: String,

    /// Session token lifetime in minutes
    pub expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            expiry_minutes: 60,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            expiry_minutes: config.token_expiry_minutes,
        }
    }
}
