//! Social login service.

use std::sync::Arc;

use bcrypt::{hash, DEFAULT_COST};
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::auth::generate_handle;
use crate::services::token::TokenService;

use super::traits::{SocialProfileFetcher, SocialProvider};

/// Exchanges a provider access token for a session, provisioning the
/// account on first sight.
pub struct SocialLoginService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: SocialProfileFetcher,
{
    user_repository: Arc<U>,
    token_service: Arc<TokenService<T>>,
    fetcher: Arc<P>,
}

impl<U, T, P> SocialLoginService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: SocialProfileFetcher,
{
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<T>>, fetcher: Arc<P>) -> Self {
        Self {
            user_repository,
            token_service,
            fetcher,
        }
    }

    /// Log in with a provider access token, creating the account if the
    /// profile email is new. Accounts created this way have a random
    /// password and count as email-verified, the provider already owns
    /// the address.
    pub async fn login(&self, provider: SocialProvider, access_token: &str) -> DomainResult<String> {
        let profile = self
            .fetcher
            .fetch_profile(provider, access_token)
            .await
            .map_err(|e| {
                tracing::warn!(provider = %provider, event = "social_login_failed", error = %e);
                AuthError::SocialLoginFailed {
                    reason: e.to_string(),
                }
            })?;

        let user = match self.user_repository.find_by_email(&profile.email).await? {
            Some(user) if user.is_deleted() => {
                return Err(AuthError::AccountDeleted.into());
            }
            Some(user) => user,
            None => {
                let password_hash = hash(random_password(), DEFAULT_COST).map_err(|e| {
                    DomainError::Internal {
                        message: format!("password hashing failed: {}", e),
                    }
                })?;

                let mut user = User::new(
                    profile.first_name.clone(),
                    profile.last_name,
                    generate_handle(&profile.first_name),
                    profile.email,
                    password_hash,
                );
                user.mark_email_verified(Utc::now());

                let user = self.user_repository.create(user).await?;
                tracing::info!(
                    user_id = %user.id,
                    provider = %provider,
                    event = "social_user_provisioned",
                    "account created from provider profile"
                );
                user
            }
        };

        self.token_service.issue(&user)
    }
}

fn random_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
