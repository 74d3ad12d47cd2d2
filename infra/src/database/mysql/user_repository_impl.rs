//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ob_core::domain::entities::user::User;
use ob_core::errors::{AuthError, DomainError};
use ob_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, first_name, last_name, handle, email, password_hash, \
                            email_verified_at, created_at, updated_at, deleted_at";

/// MySQL-backed user store. UUIDs are stored as CHAR(36).
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid user UUID: {}", e),
            })?,
            first_name: row.try_get("first_name").map_err(db_err)?,
            last_name: row.try_get("last_name").map_err(db_err)?,
            handle: row.try_get("handle").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            password_hash: row.try_get("password_hash").map_err(db_err)?,
            email_verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("email_verified_at")
                .map_err(db_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at").map_err(db_err)?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_at")
                .map_err(db_err)?,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: e.to_string(),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.map(|row| Self::row_to_user(&row)).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.map(|row| Self::row_to_user(&row)).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, first_name, last_name, handle, email, password_hash,
                email_verified_at, created_at, updated_at, deleted_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.handle)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.email_verified_at)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.deleted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::UserAlreadyExists)
                }
                other => db_err(other),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET first_name = ?, last_name = ?, handle = ?, email = ?,
                password_hash = ?, email_verified_at = ?, updated_at = ?,
                deleted_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.handle)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.email_verified_at)
            .bind(user.updated_at)
            .bind(user.deleted_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound.into());
        }

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS present")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        let present: i8 = row.try_get("present").map_err(db_err)?;
        Ok(present == 1)
    }
}
