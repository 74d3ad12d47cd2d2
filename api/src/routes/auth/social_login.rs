//! Handler for POST /api/v1/auth/social-login

use actix_web::{web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::{SocialProfileFetcher, SocialProvider};
use ob_shared::types::ApiResponse;

use crate::dto::auth::{SocialLoginRequest, TokenResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Log in with a provider access token, provisioning the account on
/// first use.
///
/// # Errors
/// - 400: invalid request data or unknown provider
/// - 401: provider rejected the access token
/// - 410: account deleted
pub async fn social_login<U, O, M, T, P>(
    state: web::Data<AppState<U, O, M, T, P>>,
    request: web::Json<SocialLoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailerService + 'static,
    T: TokenRepository + 'static,
    P: SocialProfileFetcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let provider: SocialProvider = match request.provider.parse() {
        Ok(provider) => provider,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<Value>::error("unknown_provider", e.to_string()));
        }
    };

    match state
        .social_service
        .login(provider, &request.access_token)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(ApiResponse::success(
            "Logged in",
            TokenResponse::bearer(token),
        )),
        Err(error) => domain_error_response(error),
    }
}
