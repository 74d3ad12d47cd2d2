//! OTP issuer and verifier implementation.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::otp::Otp;
use crate::domain::entities::user::User;
use crate::domain::value_objects::Operation;
use crate::errors::{AuthError, DomainResult, OtpError};
use crate::repositories::{ActivationEffect, OtpRepository, TokenRepository, UserRepository};
use crate::services::mailer::MailerService;
use crate::services::token::TokenService;

use super::config::OtpServiceConfig;

/// Service owning the OTP lifecycle for a user account.
///
/// Issuance and verification are each a handful of repository calls; the
/// only stateful step, consuming a matched code together with its
/// activation effect, is delegated to the store's atomic unit of work.
pub struct OtpService<U, O, M, T>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailerService + 'static,
    T: TokenRepository,
{
    user_repository: Arc<U>,
    otp_repository: Arc<O>,
    mailer: Arc<M>,
    token_service: Arc<TokenService<T>>,
    config: OtpServiceConfig,
}

impl<U, O, M, T> OtpService<U, O, M, T>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailerService + 'static,
    T: TokenRepository,
{
    /// Create a new OTP service
    pub fn new(
        user_repository: Arc<U>,
        otp_repository: Arc<O>,
        mailer: Arc<M>,
        token_service: Arc<TokenService<T>>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_repository,
            mailer,
            token_service,
            config,
        }
    }

    /// Issue a fresh code for `(email, operation)`.
    ///
    /// Deletes every prior code for the pair first, so at most one code is
    /// active at any time, then persists the new code and dispatches
    /// delivery out of band. Delivery failure does not roll back issuance.
    pub async fn issue(&self, email: &str, operation: Operation) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let removed = self.otp_repository.invalidate_all(user.id, operation).await?;

        let otp = self.otp_repository.create(Otp::new(user.id, operation)).await?;

        tracing::info!(
            user_id = %user.id,
            operation = %operation,
            superseded = removed,
            event = "otp_issued",
            "issued new verification code"
        );

        self.dispatch_delivery(user, otp.code);

        Ok(())
    }

    /// Verify a submitted code for `(email, operation)`.
    ///
    /// On success the code is spent and the operation's activation effect
    /// is applied in one transaction; the returned artifact is a session
    /// token for the email operation and `None` for operations without a
    /// follow-up artifact.
    ///
    /// Failure kinds are distinct on purpose: a wrong code is
    /// `CodeMismatch`, a matched-but-stale code is `CodeExpired`, and the
    /// expiry check runs only after a match.
    pub async fn verify(
        &self,
        email: &str,
        operation: Operation,
        submitted_code: &str,
    ) -> DomainResult<Option<String>> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if operation == Operation::EmailVerify && user.is_email_verified() {
            return Err(OtpError::AlreadyVerified.into());
        }

        let otp = match self.otp_repository.find_active(user.id, operation).await? {
            Some(otp) => otp,
            None => return Err(OtpError::CodeMismatch.into()),
        };

        // Numeric comparison; unparsable input is just a mismatch.
        let matched = submitted_code
            .trim()
            .parse::<u32>()
            .map(|code| otp.matches(code))
            .unwrap_or(false);
        if !matched {
            tracing::warn!(
                user_id = %user.id,
                operation = %operation,
                event = "otp_mismatch",
                "submitted code did not match"
            );
            return Err(OtpError::CodeMismatch.into());
        }

        let now = Utc::now();
        if otp.is_expired_within(now, self.config.expiry_minutes) {
            // Left in place; the next issuance deletes it.
            tracing::warn!(
                user_id = %user.id,
                operation = %operation,
                event = "otp_expired",
                "matched code was past the expiry window"
            );
            return Err(OtpError::CodeExpired.into());
        }

        // The artifact is computed before the commit: signing is pure, so
        // a failure here leaves every record untouched, and a commit
        // failure discards the token along with the attempt.
        let (effect, artifact) = match operation {
            Operation::EmailVerify => {
                let token = self.token_service.issue(&user)?;
                (
                    ActivationEffect::MarkEmailVerified {
                        user_id: user.id,
                        verified_at: now,
                    },
                    Some(token),
                )
            }
            Operation::PasswordReset => (ActivationEffect::None, None),
        };

        let consumed = self.otp_repository.consume_and_activate(otp.id, effect).await?;
        if !consumed {
            // A concurrent attempt spent the code first; to this caller
            // there was no active code.
            return Err(OtpError::CodeMismatch.into());
        }

        tracing::info!(
            user_id = %user.id,
            operation = %operation,
            event = "otp_verified",
            "verification code accepted"
        );

        Ok(artifact)
    }

    /// Hand the code to the mailer on a detached task.
    fn dispatch_delivery(&self, user: User, code: u32) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send_otp_email(&user.email, &user.first_name, code)
                .await
            {
                tracing::error!(
                    user_id = %user.id,
                    error = %e,
                    event = "otp_delivery_failed",
                    "failed to deliver verification code email"
                );
            }
        });
    }
}
