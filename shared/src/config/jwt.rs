//! JWT signing configuration module

use serde::{Deserialize, Serialize};

/// Configuration for JWT issuance and validation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign tokens
    pub secret: String,

    /// Access token lifetime in minutes
    pub token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            token_expiry_minutes: 60,
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            token_expiry_minutes: std::env::var("JWT_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_expiry_minutes),
        }
    }
}
