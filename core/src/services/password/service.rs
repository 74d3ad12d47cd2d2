//! Password change service.

use std::sync::Arc;

use bcrypt::{hash, DEFAULT_COST};

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Rehashes and persists a new password for an existing account.
pub struct PasswordService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> PasswordService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Replace the account's password with a bcrypt hash of `new_password`.
    pub async fn change_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_deleted() {
            return Err(AuthError::AccountDeleted.into());
        }

        let password_hash = hash(new_password, DEFAULT_COST).map_err(|e| {
            DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            }
        })?;

        user.set_password_hash(password_hash);
        self.user_repository.update(user).await?;

        tracing::info!(email = %email, event = "password_changed", "password updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::User;
    use crate::repositories::MockUserRepository;
    use bcrypt::verify;

    fn seeded_user(email: &str) -> User {
        User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada-x1y2".to_string(),
            email.to_string(),
            bcrypt::hash("old-password", 4).unwrap(),
        )
    }

    #[tokio::test]
    async fn change_password_rehashes_and_persists() {
        let users = Arc::new(MockUserRepository::new());
        users.create(seeded_user("a@x.com")).await.unwrap();
        let service = PasswordService::new(Arc::clone(&users));

        service.change_password("a@x.com", "new-password").await.unwrap();

        let stored = users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(verify("new-password", &stored.password_hash).unwrap());
        assert!(!verify("old-password", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn change_password_for_unknown_account_fails() {
        let users = Arc::new(MockUserRepository::new());
        let service = PasswordService::new(users);

        let err = service.change_password("ghost@x.com", "pw").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn change_password_for_deleted_account_fails() {
        let users = Arc::new(MockUserRepository::new());
        let mut user = seeded_user("gone@x.com");
        user.deleted_at = Some(chrono::Utc::now());
        users.create(user).await.unwrap();
        let service = PasswordService::new(Arc::clone(&users));

        let err = service.change_password("gone@x.com", "pw").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::AccountDeleted)));
    }
}
