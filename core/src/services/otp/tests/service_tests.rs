//! Behavioral tests for the OTP issuer and verifier.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};

use crate::domain::entities::otp::{CODE_MAX, CODE_MIN};
use crate::domain::entities::user::User;
use crate::domain::value_objects::Operation;
use crate::errors::{AuthError, DomainError, OtpError};
use crate::repositories::{
    ActivationEffect, MockOtpRepository, MockTokenRepository, MockUserRepository, OtpRepository,
    UserRepository,
};
use crate::services::otp::{OtpService, OtpServiceConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::MockMailer;

struct Fixture {
    users: Arc<MockUserRepository>,
    otps: Arc<MockOtpRepository>,
    mailer: Arc<MockMailer>,
    service: OtpService<MockUserRepository, MockOtpRepository, MockMailer, MockTokenRepository>,
}

fn fixture_with(mailer: MockMailer) -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let otps = Arc::new(MockOtpRepository::new(users.store()));
    let mailer = Arc::new(mailer);
    let token_service = Arc::new(TokenService::new(
        Arc::new(MockTokenRepository::new()),
        TokenServiceConfig {
            secret: "test-secret".to_string(),
            expiry_minutes: 60,
        },
    ));

    let service = OtpService::new(
        Arc::clone(&users),
        Arc::clone(&otps),
        Arc::clone(&mailer),
        token_service,
        OtpServiceConfig::default(),
    );

    Fixture {
        users,
        otps,
        mailer,
        service,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockMailer::new())
}

async fn register(fixture: &Fixture, email: &str) -> User {
    let user = User::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        format!("ada-{}", &email[..1]),
        email.to_string(),
        "hash".to_string(),
    );
    fixture.users.create(user).await.unwrap()
}

/// Let the spawned delivery task run.
async fn settle() {
    tokio::time::sleep(StdDuration::from_millis(50)).await;
}

#[tokio::test]
async fn issue_for_unknown_user_fails() {
    let fx = fixture();
    let err = fx.service.issue("ghost@x.com", Operation::EmailVerify).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn issue_supersedes_only_the_exact_pair() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;
    let bob = register(&fx, "b@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    let first = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();

    fx.service.issue("a@x.com", Operation::PasswordReset).await.unwrap();
    fx.service.issue("b@x.com", Operation::EmailVerify).await.unwrap();

    // Re-issuing for the same pair deletes the prior code.
    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    let second = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(first.id, second.id);
    assert!(fx.otps.get(first.id).await.is_none(), "superseded code must be deleted");

    // Other operations and other users keep their codes.
    assert!(fx
        .otps
        .find_active(alice.id, Operation::PasswordReset)
        .await
        .unwrap()
        .is_some());
    assert!(fx
        .otps
        .find_active(bob.id, Operation::EmailVerify)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn issue_delivers_the_code_out_of_band() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    settle().await;

    let active = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();
    let deliveries = fx.mailer.deliveries().await;
    assert_eq!(deliveries, vec![("a@x.com".to_string(), active.code)]);
    assert!((CODE_MIN..=CODE_MAX).contains(&active.code));
}

#[tokio::test]
async fn delivery_failure_does_not_fail_issuance() {
    let fx = fixture_with(MockMailer::failing());
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    settle().await;

    // The code is persisted and verifiable even though the mail bounced.
    let active = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();
    let token = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, &active.code.to_string())
        .await
        .unwrap();
    assert!(token.is_some());
}

#[tokio::test]
async fn verify_for_unknown_user_fails() {
    let fx = fixture();
    let err = fx
        .service
        .verify("ghost@x.com", Operation::EmailVerify, "123456")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn wrong_code_then_correct_code_scenario() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    let active = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();

    // Codes start at 111111, so 000000 can never match.
    let err = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, "000000")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::CodeMismatch)));

    let token = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, &active.code.to_string())
        .await
        .unwrap();
    assert!(token.is_some(), "email verification must yield a session token");

    // Side effects: code spent, account activated.
    assert!(!fx.otps.get(active.id).await.unwrap().is_active);
    let refreshed = fx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert!(refreshed.is_email_verified());
}

#[tokio::test]
async fn verified_account_short_circuits_before_code_comparison() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    let active = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();
    fx.service
        .verify("a@x.com", Operation::EmailVerify, &active.code.to_string())
        .await
        .unwrap();

    // Any further attempt reports the terminal state, even for garbage input.
    let err = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, "not-a-number")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::AlreadyVerified)));
}

#[tokio::test]
async fn hookless_operation_is_single_use_and_yields_no_artifact() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::PasswordReset).await.unwrap();
    let active = fx
        .otps
        .find_active(alice.id, Operation::PasswordReset)
        .await
        .unwrap()
        .unwrap();
    let code = active.code.to_string();

    let artifact = fx
        .service
        .verify("a@x.com", Operation::PasswordReset, &code)
        .await
        .unwrap();
    assert!(artifact.is_none());

    // No activation effect for this operation.
    let refreshed = fx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert!(!refreshed.is_email_verified());

    // Re-submitting the spent code is a mismatch, not a crash.
    let err = fx
        .service
        .verify("a@x.com", Operation::PasswordReset, &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::CodeMismatch)));
}

#[tokio::test]
async fn stale_code_reports_expired_not_mismatch() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    let mut active = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();

    // Backdate issuance past the one-minute window.
    active.created_at = Utc::now() - Duration::seconds(61);
    fx.otps.put(active.clone()).await;

    let err = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, &active.code.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::CodeExpired)));

    // A wrong code against the same stale OTP is still a mismatch: the
    // expiry check only runs after a match.
    let err = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, "000000")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::CodeMismatch)));

    // No activation happened.
    let refreshed = fx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert!(!refreshed.is_email_verified());
}

#[tokio::test]
async fn race_loser_observes_no_active_code() {
    let fx = fixture();
    let alice = register(&fx, "a@x.com").await;

    fx.service.issue("a@x.com", Operation::EmailVerify).await.unwrap();
    let active = fx
        .otps
        .find_active(alice.id, Operation::EmailVerify)
        .await
        .unwrap()
        .unwrap();

    // A concurrent attempt spends the code between this caller's read and
    // its commit; no activation effect applies, so the terminal
    // AlreadyVerified branch stays out of the way.
    let spent = fx
        .otps
        .consume_and_activate(active.id, ActivationEffect::None)
        .await
        .unwrap();
    assert!(spent);

    let err = fx
        .service
        .verify("a@x.com", Operation::EmailVerify, &active.code.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::CodeMismatch)));
}
