//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// In-memory user repository for tests.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Shared handle to the backing store, so the OTP mock can apply
    /// activation effects against the same users.
    pub fn store(&self) -> Arc<RwLock<HashMap<Uuid, User>>> {
        Arc::clone(&self.users)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(
            "Test".to_string(),
            "User".to_string(),
            format!("test-{}", &email[..1]),
            email.to_string(),
            "hash".to_string(),
        )
    }

    #[tokio::test]
    async fn create_then_find_by_email() {
        let repo = MockUserRepository::new();
        let created = repo.create(user("a@x.com")).await.unwrap();

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(repo.exists_by_email("a@x.com").await.unwrap());
        assert!(!repo.exists_by_email("b@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = MockUserRepository::new();
        repo.create(user("a@x.com")).await.unwrap();

        let err = repo.create(user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn update_unknown_user_fails() {
        let repo = MockUserRepository::new();
        let err = repo.update(user("ghost@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    }
}
