//! Handler for POST /api/v1/auth/otp/send

use actix_web::{web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use ob_core::domain::value_objects::Operation;
use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::dto::auth::OtpSendRequest;
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Issue a fresh one-time code for the given operation and email it to
/// the account. Any earlier codes for the same pair stop working.
///
/// # Errors
/// - 400: invalid request data or unknown operation
/// - 404: no account with that email
pub async fn otp_send<U, O, M, T, P>(
    state: web::Data<AppState<U, O, M, T, P>>,
    request: web::Json<OtpSendRequest>,
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

    match state.otp_service.issue(&request.email, operation).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only("Verification code sent")),
        Err(error) => domain_error_response(error),
    }
}
