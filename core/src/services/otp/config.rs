//! OTP service configuration

use crate::domain::entities::otp::OTP_EXPIRY_MINUTES;

/// Configuration for the OTP issuer and verifier.
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Minutes after issuance during which a code is accepted
    pub expiry_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: OTP_EXPIRY_MINUTES,
        }
    }
}
