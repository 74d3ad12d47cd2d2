//! Delivery dispatcher contract for outbound OTP mail.
//!
//! The OTP issuer hands codes to this trait fire-and-forget; a failed
//! delivery is logged and never surfaced to the caller, and delivery is
//! not required to succeed for a later verification to work.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a mail transport implementation.
#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Mail transport failure: {0}")]
    Transport(String),

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
}

/// Outbound mail contract used by the OTP issuer.
#[async_trait]
pub trait MailerService: Send + Sync {
    /// Deliver the onboarding email carrying a zero-padded 6-digit code.
    async fn send_otp_email(
        &self,
        recipient: &str,
        first_name: &str,
        code: u32,
    ) -> Result<(), MailerError>;
}
