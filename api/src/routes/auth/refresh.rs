//! Handler for POST /api/v1/auth/refresh

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use ob_core::repositories::{OtpRepository, TokenRepository, UserRepository};
use ob_core::services::mailer::MailerService;
use ob_core::services::social::SocialProfileFetcher;
use ob_shared::types::ApiResponse;

use crate::dto::auth::TokenResponse;
use crate::handlers::error::domain_error_response;

use super::{bearer_token, AppState};

/// Rotate the presented bearer token: the old one is revoked, a fresh
/// one is returned.
///
/// # Errors
/// - 401: missing, malformed, expired or revoked token
pub async fn refresh<U, O, M, T, P>(
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

    match state.auth_service.refresh(token).await {
        Ok(rotated) => HttpResponse::Ok().json(ApiResponse::success(
            "Token refreshed",
            TokenResponse::bearer(rotated),
        )),
        Err(error) => domain_error_response(error),
    }
}
