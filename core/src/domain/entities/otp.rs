//! One-time password entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Operation;

/// Smallest code ever issued; keeps every code exactly six digits wide.
pub const CODE_MIN: u32 = 111_111;

/// Largest code ever issued.
pub const CODE_MAX: u32 = 999_999;

/// Codes are accepted for one minute after issuance.
pub const OTP_EXPIRY_MINUTES: i64 = 1;

/// A persisted one-time code scoped to a (user, operation) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Otp {
    /// Unique identifier for this code
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// What the code authorizes
    pub operation: Operation,

    /// The 6-digit numeric code
    pub code: u32,

    /// Whether the code is still usable; cleared on consumption
    pub is_active: bool,

    /// Issuance timestamp, basis for expiry
    pub created_at: DateTime<Utc>,
}

impl Otp {
    /// Creates a new active OTP with a fresh random code.
    pub fn new(user_id: Uuid, operation: Operation) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            operation,
            code: Self::generate_code(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Generates a uniform random code in `[CODE_MIN, CODE_MAX]`.
    pub fn generate_code() -> u32 {
        rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX)
    }

    /// Whether the code is older than the fixed expiry window at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.is_expired_within(now, OTP_EXPIRY_MINUTES)
    }

    /// Expiry check against an explicit window, for configured services.
    pub fn is_expired_within(&self, now: DateTime<Utc>, minutes: i64) -> bool {
        now - self.created_at > Duration::minutes(minutes)
    }

    /// Numeric comparison against a submitted code.
    pub fn matches(&self, submitted: u32) -> bool {
        self.code == submitted
    }

    /// Marks the code consumed.
    pub fn consume(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_otp_is_active_with_code_in_range() {
        let otp = Otp::new(Uuid::new_v4(), Operation::EmailVerify);
        assert!(otp.is_active);
        assert!(otp.code >= CODE_MIN && otp.code <= CODE_MAX);
        assert!(!otp.is_expired(Utc::now()));
    }

    #[test]
    fn generated_codes_stay_in_range() {
        for _ in 0..1000 {
            let code = Otp::generate_code();
            assert!((CODE_MIN..=CODE_MAX).contains(&code), "code {} out of range", code);
        }
    }

    #[test]
    fn generated_codes_vary() {
        let codes: std::collections::HashSet<u32> =
            (0..100).map(|_| Otp::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn expires_strictly_after_one_minute() {
        let otp = Otp::new(Uuid::new_v4(), Operation::EmailVerify);

        let at_window = otp.created_at + Duration::seconds(60);
        assert!(!otp.is_expired(at_window));

        let past_window = otp.created_at + Duration::seconds(61);
        assert!(otp.is_expired(past_window));
    }

    #[test]
    fn matches_is_numeric() {
        let mut otp = Otp::new(Uuid::new_v4(), Operation::EmailVerify);
        otp.code = 123_456;
        assert!(otp.matches(123_456));
        assert!(!otp.matches(123_457));
    }

    #[test]
    fn consume_clears_active_flag() {
        let mut otp = Otp::new(Uuid::new_v4(), Operation::PasswordReset);
        otp.consume();
        assert!(!otp.is_active);
    }
}
