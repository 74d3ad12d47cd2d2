//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Authenticate with email and password.
///
/// # Errors
/// - 401: wrong password
/// - 404: no account with that email
/// - 410: account deleted
pub async fn login<U, O, M, T, P>(
    state: web::Data<AppState<U, O, M, T, P>>,
    request: web::Json<LoginRequest>,
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

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(token) => HttpResponse::Ok().json(ApiResponse::success(
            "Logged in",
            TokenResponse::bearer(token),
        )),
        Err(error) => domain_error_response(error),
    }
}
