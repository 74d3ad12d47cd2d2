//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for issuing and validating session JWTs.
///
/// Tokens are HS256-signed and stateless; logout and refresh rotation
/// revoke the old token's `jti` through the repository denylist.
pub struct TokenService<T: TokenRepository> {
    repository: Arc<T>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<T: TokenRepository> TokenService<T> {
    /// Creates a new token service instance
    pub fn new(repository: Arc<T>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a fresh session token for `user`.
    pub fn issue(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new_session(user.id, &user.email, self.config.expiry_minutes);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "failed to sign session token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Decodes and signature-checks a token without consulting the denylist.
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }

    /// Full validation: signature, expiry, and revocation state.
    pub async fn validate(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode(token)?;

        if self.repository.is_revoked(&claims.jti).await? {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        Ok(claims)
    }

    /// Revokes a live token, e.g. on logout.
    pub async fn revoke(&self, token: &str) -> DomainResult<()> {
        let claims = self.validate(token).await?;
        self.repository.revoke(&claims.jti, claims.expires_at()).await?;

        tracing::info!(jti = %claims.jti, event = "token_revoked", "session token revoked");
        Ok(())
    }

    /// Rotates a live token: the old one is revoked, a fresh one issued
    /// for the same identity.
    pub async fn refresh(&self, token: &str) -> DomainResult<String> {
        let claims = self.validate(token).await?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;

        self.repository.revoke(&claims.jti, claims.expires_at()).await?;

        let fresh = Claims::new_session(user_id, &claims.email, self.config.expiry_minutes);
        encode(&Header::new(Algorithm::HS256), &fresh, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "failed to sign rotated token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }
}
