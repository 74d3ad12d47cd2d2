//! Handler for POST /api/v1/auth/otp/verify

use actix_web::{web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use ob_core::domain::value_objects::Operation;
use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::dto::auth::{OtpVerifyRequest, TokenResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Check a submitted code against the active one for the pair. On
/// success the code is spent; the email operation additionally marks
/// the account verified and returns a session token.
///
/// # Errors
/// - 400: invalid request, unknown operation, wrong, spent or expired
///   code, or account already verified
/// - 404: no account with that email
pub async fn otp_verify<U, O, M, T, P>(
    state: web::Data<AppState<U, O, M, T, P>>,
    request: web::Json<OtpVerifyRequest>,
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

    let operation: Operation = match request.operation.parse() {
        Ok(operation) => operation,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<Value>::error("unknown_operation", e.to_string()));
        }
    };

    match state
        .otp_service
        .verify(&request.email, operation, &request.code)
        .await
    {
        Ok(Some(token)) => HttpResponse::Ok().json(ApiResponse::success(
            "Email verified",
            TokenResponse::bearer(token),
        )),
        Ok(None) => HttpResponse::Ok().json(ApiResponse::message_only("Code accepted")),
        Err(error) => domain_error_response(error),
    }
}
