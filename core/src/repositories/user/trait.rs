//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for `User` entities.
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between the domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login email.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - user found
    /// * `Ok(None)` - no user with that email
    /// * `Err(DomainError)` - persistence failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user.
    ///
    /// Fails with `AuthError::UserAlreadyExists` when the email is taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist updated fields of an existing user.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Whether a user is registered with the given email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
