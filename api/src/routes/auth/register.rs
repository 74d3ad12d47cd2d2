//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::auth::RegisterCredentials;
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::dto::auth::{RegisterRequest, TokenResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Create an account, start email verification, and return a session
/// token.
///
/// # Errors
/// - 400: invalid request data
/// - 409: email already registered
/// - 500: persistence or hashing failure
pub async fn register<U, O, M, T, P>(
    state: web::Data<AppState<U, O, M, T, P>>,
    request: web::Json<RegisterRequest>,
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

    let credentials = RegisterCredentials {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        password: request.password.clone(),
    };

    match state.auth_service.register(credentials).await {
        Ok(token) => HttpResponse::Created().json(ApiResponse::success(
            "Account created, verification code sent",
            TokenResponse::bearer(token),
        )),
        Err(error) => domain_error_response(error),
    }
}
