//! MySQL implementation of the TokenRepository trait.
//!
//! Revocations are keyed by JWT `jti`; the stored `expires_at` lets a
//! cleanup job drop rows for tokens that would have expired anyway.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ob_core::errors::DomainError;
use ob_core::repositories::TokenRepository;

/// MySQL-backed JWT denylist.
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Delete denylist rows whose token has expired on its own.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected())
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: e.to_string(),
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError> {
        // Revoking twice is a no-op.
        sqlx::query(
            "INSERT INTO revoked_tokens (jti, expires_at, revoked_at) VALUES (?, ?, ?) \
             ON DUPLICATE KEY UPDATE jti = jti",
        )
        .bind(jti)
        .bind(expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE jti = ?) AS present")
            .bind(jti)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        let present: i8 = row.try_get("present").map_err(db_err)?;
        Ok(present == 1)
    }
}
