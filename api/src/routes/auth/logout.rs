//! Handler for POST /api/v1/auth/logout

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::handlers::error::domain_error_response;

use super::{bearer_token, AppState};

/// Revoke the presented bearer token.
///
/// # Errors
/// - 401: missing, malformed, expired or already revoked token
pub async fn logout<U, O, M, T, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, O, M, T, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailerService + 'static,
    T: TokenRepository + 'static,
    P: SocialProfileFetcher + 'static,
{
    let Some(token) = bearer_token(&req) else {
        return HttpResponse::Unauthorized().json(ApiResponse::<Value>::error(
            "missing_token",
            "Authorization header with a bearer token is required",
        ));
    };

    match state.auth_service.logout(token).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only("Logged out")),
        Err(error) => domain_error_response(error),
    }
}
