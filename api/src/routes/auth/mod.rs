//! Authentication route handlers.
//!
//! Endpoints under /api/v1/auth:
//! - Registration and login
//! - OTP issue and verify
//! - Password change
//! - Social login
//! - Logout and token refresh

pub mod change_password;
pub mod login;
pub mod logout;
pub mod otp_send;
pub mod otp_verify;
pub mod refresh;
pub mod register;
pub mod social_login;

use std::sync::Arc;

use actix_web::HttpRequest;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::auth::AuthService;
use ob_core::services::mailer::MailerService;
use ob_core::services::otp::OtpService;
use ob_core::services::password::PasswordService;
use ob_core::services::social::{SocialLoginService, SocialProfileFetcher};
use ob_core::services::token::TokenService;

/// Application state holding the shared services.
pub struct AppState<U, O, M, T, P>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailerService + 'static,
    T: TokenRepository,
    P: SocialProfileFetcher,
{
    pub auth_service: Arc<AuthService<U, O, M, T>>,
    pub otp_service: Arc<OtpService<U, O, M, T>>,
    pub password_service: Arc<PasswordService<U>>,
    pub social_service: Arc<SocialLoginService<U, T, P>>,
}

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn bearer_token_strips_the_scheme() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn bearer_token_requires_the_header() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);
    }
}
