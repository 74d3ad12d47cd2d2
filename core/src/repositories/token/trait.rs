//! Revoked-token repository trait.
//!
//! Session JWTs are stateless; logout and refresh rotation work by
//! denylisting the token's `jti` until its natural expiry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Repository contract for the JWT revocation denylist.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Record `jti` as revoked. `expires_at` lets the store drop the row
    /// once the token would have expired anyway.
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Whether `jti` has been revoked.
    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError>;
}
