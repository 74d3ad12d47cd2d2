//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Unique public handle, generated at registration
    pub handle: String,

    /// Login email, unique across accounts
    pub email: String,

    /// bcrypt hash of the password; never the plain text
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Set once the email operation OTP has been verified
    pub email_verified_at: Option<DateTime<Utc>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft-delete marker; a deleted account cannot log in
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new unverified user.
    pub fn new(
        first_name: String,
        last_name: String,
        handle: String,
        email: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            handle,
            email,
            password_hash,
            email_verified_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Records a successful email verification.
    pub fn mark_email_verified(&mut self, at: DateTime<Utc>) {
        self.email_verified_at = Some(at);
        self.updated_at = at;
    }

    /// Whether the email operation has already completed for this account.
    pub fn is_email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    /// Replaces the stored password hash.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Whether the account has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
