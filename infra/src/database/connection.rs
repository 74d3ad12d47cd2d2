//! Connection pool management for MySQL.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use ob_core::errors::{DomainError, DomainResult};
use ob_shared::config::DatabaseConfig;

/// Wrapper around the SQLx MySQL pool, built from [`DatabaseConfig`].
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> DomainResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to connect to database: {}", e),
            })?;

        tracing::info!(
            max_connections = config.max_connections,
            event = "database_connected",
            "database pool established"
        );

        Ok(Self { pool })
    }

    /// Verify the pool can still reach the server.
    pub async fn health_check(&self) -> DomainResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("database health check failed: {}", e),
            })?;
        Ok(())
    }

    /// Access the raw pool for repository construction.
    pub fn inner(&self) -> MySqlPool {
        self.pool.clone()
    }
}
