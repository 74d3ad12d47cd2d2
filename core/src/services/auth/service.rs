//! Main authentication service implementation

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use ob_shared::utils::validation::is_valid_email;

use crate::domain::entities::user::User;
use crate::domain::value_objects::Operation;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{OtpRepository, TokenRepository, UserRepository};
use crate::services::mailer::MailerService;
use crate::services::otp::OtpService;
use crate::services::token::TokenService;

use super::handle::generate_handle;

/// Input for account registration.
#[derive(Debug, Clone)]
pub struct RegisterCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Authentication service for the register/login/logout/refresh flow.
pub struct AuthService<U, O, M, T>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailerService + 'static,
    T: TokenRepository,
{
    user_repository: Arc<U>,
    otp_service: Arc<OtpService<U, O, M, T>>,
    token_service: Arc<TokenService<T>>,
}

impl<U, O, M, T> AuthService<U, O, M, T>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailerService + 'static,
    T: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<U, O, M, T>>,
        token_service: Arc<TokenService<T>>,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            token_service,
        }
    }

    /// Register a new account.
    ///
    /// Persists the user with a bcrypt-hashed password and a generated
    /// handle, kicks off email verification by issuing an OTP, and
    /// returns a session token so the client can poll the verify
    /// endpoint.
    pub async fn register(&self, credentials: RegisterCredentials) -> DomainResult<String> {
        if !is_valid_email(&credentials.email) {
            return Err(DomainError::Validation {
                message: format!("invalid email address: {}", credentials.email),
            });
        }

        if self.user_repository.exists_by_email(&credentials.email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash(&credentials.password, DEFAULT_COST)
            .map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            })?;

        let user = User::new(
            credentials.first_name.clone(),
            credentials.last_name,
            generate_handle(&credentials.first_name),
            credentials.email,
            password_hash,
        );
        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = %user.id, event = "user_registered", "new account created");

        self.otp_service.issue(&user.email, Operation::EmailVerify).await?;

        self.token_service.issue(&user)
    }

    /// Authenticate with email and password, returning a session token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_deleted() {
            return Err(AuthError::AccountDeleted.into());
        }

        let password_ok = verify(password, &user.password_hash).map_err(|e| {
            DomainError::Internal {
                message: format!("password verification failed: {}", e),
            }
        })?;
        if !password_ok {
            tracing::warn!(user_id = %user.id, event = "login_rejected", "wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.token_service.issue(&user)
    }

    /// Invalidate the presented session token.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.token_service.revoke(token).await
    }

    /// Rotate the presented session token.
    pub async fn refresh(&self, token: &str) -> DomainResult<String> {
        self.token_service.refresh(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TokenError;
    use crate::repositories::{MockOtpRepository, MockTokenRepository, MockUserRepository};
    use crate::services::otp::tests::mocks::MockMailer;
    use crate::services::otp::OtpServiceConfig;
    use crate::services::token::TokenServiceConfig;

    type Service = AuthService<MockUserRepository, MockOtpRepository, MockMailer, MockTokenRepository>;

    fn service() -> (Arc<MockUserRepository>, Service) {
        let users = Arc::new(MockUserRepository::new());
        let otps = Arc::new(MockOtpRepository::new(users.store()));
        let mailer = Arc::new(MockMailer::new());
        let token_service = Arc::new(TokenService::new(
            Arc::new(MockTokenRepository::new()),
            TokenServiceConfig {
                secret: "test-secret".to_string(),
                expiry_minutes: 60,
            },
        ));
        let otp_service = Arc::new(OtpService::new(
            Arc::clone(&users),
            otps,
            mailer,
            Arc::clone(&token_service),
            OtpServiceConfig::default(),
        ));

        let auth = AuthService::new(Arc::clone(&users), otp_service, token_service);
        (users, auth)
    }

    fn credentials(email: &str) -> RegisterCredentials {
        RegisterCredentials {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: "correct-horse".to_string(),
        }
    }

    #[tokio::test]
    async fn register_persists_user_and_returns_token() {
        let (users, auth) = service();

        let token = auth.register(credentials("a@x.com")).await.unwrap();
        assert!(!token.is_empty());

        let user = users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "correct-horse");
        assert!(user.handle.starts_with("ada-"));
        assert!(!user.is_email_verified());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let (_, auth) = service();
        auth.register(credentials("a@x.com")).await.unwrap();

        let err = auth.register(credentials("a@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn register_rejects_malformed_email() {
        let (_, auth) = service();
        let err = auth.register(credentials("not-an-email")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn login_checks_the_password() {
        let (_, auth) = service();
        auth.register(credentials("a@x.com")).await.unwrap();

        assert!(auth.login("a@x.com", "correct-horse").await.is_ok());

        let err = auth.login("a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));

        let err = auth.login("ghost@x.com", "whatever").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn logout_revokes_the_session() {
        let (_, auth) = service();
        auth.register(credentials("a@x.com")).await.unwrap();
        let token = auth.login("a@x.com", "correct-horse").await.unwrap();

        auth.logout(&token).await.unwrap();

        let err = auth.refresh(&token).await.unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));
    }

    #[tokio::test]
    async fn refresh_issues_a_different_token() {
        let (_, auth) = service();
        auth.register(credentials("a@x.com")).await.unwrap();
        let token = auth.login("a@x.com", "correct-horse").await.unwrap();

        let rotated = auth.refresh(&token).await.unwrap();
        assert_ne!(token, rotated);
    }
}
