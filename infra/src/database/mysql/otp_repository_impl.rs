//! MySQL implementation of the OtpRepository trait.
//!
//! `consume_and_activate` is the one transactional entry point: it spends
//! the code and applies the operation's account effect in a single MySQL
//! transaction, using the conditional UPDATE's row count to settle races.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ob_core::domain::entities::otp::Otp;
use ob_core::domain::value_objects::Operation;
use ob_core::errors::DomainError;
use ob_core::repositories::{ActivationEffect, OtpRepository};

/// MySQL-backed OTP store.
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_otp(row: &sqlx::mysql::MySqlRow) -> Result<Otp, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let user_id: String = row.try_get("user_id").map_err(db_err)?;
        let operation: String = row.try_get("operation").map_err(db_err)?;

        Ok(Otp {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid otp UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("invalid user UUID: {}", e),
            })?,
            operation: operation.parse().map_err(|e| DomainError::Database {
                message: format!("unrecognized operation column: {}", e),
            })?,
            code: row.try_get::<u32, _>("code").map_err(db_err)?,
            is_active: row.try_get("is_active").map_err(db_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: e.to_string(),
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn find_active(
        &self,
        user_id: Uuid,
        operation: Operation,
    ) -> Result<Option<Otp>, DomainError> {
        let query = r#"
            SELECT id, user_id, operation, code, is_active, created_at
            FROM otps
            WHERE user_id = ? AND operation = ? AND is_active = TRUE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(operation.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.map(|row| Self::row_to_otp(&row)).transpose()
    }

    async fn invalidate_all(
        &self,
        user_id: Uuid,
        operation: Operation,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otps WHERE user_id = ? AND operation = ?")
            .bind(user_id.to_string())
            .bind(operation.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected())
    }

    async fn create(&self, otp: Otp) -> Result<Otp, DomainError> {
        let query = r#"
            INSERT INTO otps (id, user_id, operation, code, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(otp.id.to_string())
            .bind(otp.user_id.to_string())
            .bind(otp.operation.as_str())
            .bind(otp.code)
            .bind(otp.is_active)
            .bind(otp.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(otp)
    }

    async fn consume_and_activate(
        &self,
        otp_id: Uuid,
        effect: ActivationEffect,
    ) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let consumed = sqlx::query(
            "UPDATE otps SET is_active = FALSE WHERE id = ? AND is_active = TRUE",
        )
        .bind(otp_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        if consumed.rows_affected() == 0 {
            // Lost the race; leave the store untouched.
            tx.rollback().await.map_err(db_err)?;
            return Ok(false);
        }

        if let ActivationEffect::MarkEmailVerified { user_id, verified_at } = effect {
            sqlx::query("UPDATE users SET email_verified_at = ?, updated_at = ? WHERE id = ?")
                .bind(verified_at)
                .bind(verified_at)
                .bind(user_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
        }

        tx.commit().await.map_err(db_err)?;
        Ok(true)
    }
}
