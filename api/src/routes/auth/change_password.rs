//! Handler for POST /api/v1/auth/password/change

use actix_web::{web, HttpResponse};
use validator::Validate;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::dto::auth::ChangePasswordRequest;
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Replace the account's password.
///
/// # Errors
/// - 400: invalid request data
/// - 404: no account with that email
/// - 410: account deleted
pub async fn change_password<U, O, M, T, P>(
    state: web::Data<AppState<U, O, M, T, P>>,
    request: web::Json<ChangePasswordRequest>,
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

    match state
        .password_service
        .change_password(&request.email, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only("Password updated")),
        Err(error) => domain_error_response(error),
    }
}
