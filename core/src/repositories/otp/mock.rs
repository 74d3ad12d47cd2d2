//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp::Otp;
use crate::domain::entities::user::User;
use crate::domain::value_objects::Operation;
use crate::errors::DomainError;

use super::trait_::{ActivationEffect, OtpRepository};

/// In-memory OTP store for tests.
///
/// Holds a handle to the user map of a `MockUserRepository` so activation
/// effects land on the same users the service reads, mirroring what the
/// SQL implementation does inside one transaction.
pub struct MockOtpRepository {
    otps: Arc<RwLock<HashMap<Uuid, Otp>>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockOtpRepository {
    /// Create a mock store sharing `users` with the user repository mock.
    pub fn new(users: Arc<RwLock<HashMap<Uuid, User>>>) -> Self {
        Self {
            otps: Arc::new(RwLock::new(HashMap::new())),
            users,
        }
    }

    /// Snapshot of a stored OTP, for assertions.
    pub async fn get(&self, otp_id: Uuid) -> Option<Otp> {
        self.otps.read().await.get(&otp_id).cloned()
    }

    /// Number of stored codes across all pairs, for assertions.
    pub async fn len(&self) -> usize {
        self.otps.read().await.len()
    }

    /// Overwrite a stored OTP, e.g. to backdate `created_at` in tests.
    pub async fn put(&self, otp: Otp) {
        self.otps.write().await.insert(otp.id, otp);
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn find_active(
        &self,
        user_id: Uuid,
        operation: Operation,
    ) -> Result<Option<Otp>, DomainError> {
        let otps = self.otps.read().await;
        Ok(otps
            .values()
            .find(|o| o.user_id == user_id && o.operation == operation && o.is_active)
            .cloned())
    }

    async fn invalidate_all(
        &self,
        user_id: Uuid,
        operation: Operation,
    ) -> Result<u64, DomainError> {
        let mut otps = self.otps.write().await;
        let before = otps.len();
        otps.retain(|_, o| !(o.user_id == user_id && o.operation == operation));
        Ok((before - otps.len()) as u64)
    }

    async fn create(&self, otp: Otp) -> Result<Otp, DomainError> {
        let mut otps = self.otps.write().await;
        otps.insert(otp.id, otp.clone());
        Ok(otp)
    }

    async fn consume_and_activate(
        &self,
        otp_id: Uuid,
        effect: ActivationEffect,
    ) -> Result<bool, DomainError> {
        // Both maps stay locked for the whole step, which is as atomic as
        // an in-memory double write gets.
        let mut otps = self.otps.write().await;
        let mut users = self.users.write().await;

        let otp = match otps.get_mut(&otp_id) {
            Some(otp) if otp.is_active => otp,
            _ => return Ok(false),
        };
        otp.consume();

        if let ActivationEffect::MarkEmailVerified { user_id, verified_at } = effect {
            if let Some(user) = users.get_mut(&user_id) {
                user.mark_email_verified(verified_at);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_store() -> (MockOtpRepository, Arc<RwLock<HashMap<Uuid, User>>>) {
        let users: Arc<RwLock<HashMap<Uuid, User>>> = Arc::new(RwLock::new(HashMap::new()));
        (MockOtpRepository::new(Arc::clone(&users)), users)
    }

    #[tokio::test]
    async fn invalidate_all_scopes_to_the_pair() {
        let (repo, _) = fresh_store();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        repo.create(Otp::new(user_a, Operation::EmailVerify)).await.unwrap();
        repo.create(Otp::new(user_a, Operation::PasswordReset)).await.unwrap();
        repo.create(Otp::new(user_b, Operation::EmailVerify)).await.unwrap();

        let removed = repo.invalidate_all(user_a, Operation::EmailVerify).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.len().await, 2);

        assert!(repo.find_active(user_a, Operation::EmailVerify).await.unwrap().is_none());
        assert!(repo.find_active(user_a, Operation::PasswordReset).await.unwrap().is_some());
        assert!(repo.find_active(user_b, Operation::EmailVerify).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn consume_is_single_use() {
        let (repo, _) = fresh_store();
        let otp = repo
            .create(Otp::new(Uuid::new_v4(), Operation::EmailVerify))
            .await
            .unwrap();

        assert!(repo.consume_and_activate(otp.id, ActivationEffect::None).await.unwrap());
        // The race loser observes the code already spent.
        assert!(!repo.consume_and_activate(otp.id, ActivationEffect::None).await.unwrap());
    }

    #[tokio::test]
    async fn activation_effect_reaches_the_user() {
        let (repo, users) = fresh_store();
        let user = User::new(
            "A".into(),
            "B".into(),
            "a-b".into(),
            "a@x.com".into(),
            "hash".into(),
        );
        let user_id = user.id;
        users.write().await.insert(user_id, user);

        let otp = repo.create(Otp::new(user_id, Operation::EmailVerify)).await.unwrap();
        let verified_at = chrono::Utc::now();
        repo.consume_and_activate(
            otp.id,
            ActivationEffect::MarkEmailVerified { user_id, verified_at },
        )
        .await
        .unwrap();

        assert!(users.read().await[&user_id].is_email_verified());
    }
}
