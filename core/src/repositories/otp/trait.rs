//! OTP store trait: pure persistence for one-time codes.
//!
//! The issuer and verifier services are the only callers. The one piece of
//! behavior beyond CRUD is `consume_and_activate`, the atomic unit of work
//! that spends a code and applies the operation's side effect together.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::otp::Otp;
use crate::domain::value_objects::Operation;
use crate::errors::DomainError;

/// Account-state change applied atomically with OTP consumption.
///
/// Closed set: each operation's hook is a variant, so the store can apply
/// it inside its own transaction without calling back into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEffect {
    /// Stamp `email_verified_at` on the user.
    MarkEmailVerified {
        user_id: Uuid,
        verified_at: DateTime<Utc>,
    },
    /// The operation defines no account-state change.
    None,
}

/// Repository contract for OTP persistence.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// The single active code for a (user, operation) pair, if any.
    async fn find_active(
        &self,
        user_id: Uuid,
        operation: Operation,
    ) -> Result<Option<Otp>, DomainError>;

    /// Delete every code for the pair, active or not. Returns the number
    /// of rows removed. Superseded codes are deleted, not archived.
    async fn invalidate_all(
        &self,
        user_id: Uuid,
        operation: Operation,
    ) -> Result<u64, DomainError>;

    /// Persist a freshly issued code.
    async fn create(&self, otp: Otp) -> Result<Otp, DomainError>;

    /// Atomically mark the code consumed and apply `effect`.
    ///
    /// All-or-nothing: on any failure neither write is visible and the
    /// code stays active, so the caller may retry before expiry.
    ///
    /// # Returns
    /// * `Ok(true)` - code was active and is now spent, effect applied
    /// * `Ok(false)` - code was no longer active (a concurrent attempt
    ///   won the race); nothing was written
    /// * `Err(DomainError)` - persistence failure, transaction rolled back
    async fn consume_and_activate(
        &self,
        otp_id: Uuid,
        effect: ActivationEffect,
    ) -> Result<bool, DomainError>;
}
