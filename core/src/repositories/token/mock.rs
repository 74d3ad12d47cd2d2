//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// In-memory revocation denylist for tests.
pub struct MockTokenRepository {
    revoked: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError> {
        self.revoked.write().await.insert(jti.to_string(), expires_at);
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        Ok(self.revoked.read().await.contains_key(jti))
    }
}
