//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;
use serde_json::Value;

use ob_core::errors::{AuthError, DomainError, OtpError, TokenError};
use ob_shared::types::ApiResponse;

/// Convert validation failures from the DTO layer into a 400 response.
pub fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<Value>::error(
        "validation_error",
        errors.to_string(),
    ))
}

/// Convert a domain error into its HTTP status and response body.
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    tracing::error!(error = %error, "request failed");

    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<Value>::error("validation_error", message))
        }

        DomainError::Auth(auth) => match auth {
            AuthError::UserNotFound => HttpResponse::NotFound()
                .json(ApiResponse::<Value>::error("user_not_found", auth.to_string())),
            AuthError::UserAlreadyExists => HttpResponse::Conflict()
                .json(ApiResponse::<Value>::error("user_already_exists", auth.to_string())),
            AuthError::InvalidCredentials => HttpResponse::Unauthorized()
                .json(ApiResponse::<Value>::error("invalid_credentials", auth.to_string())),
            AuthError::AccountDeleted => HttpResponse::Gone()
                .json(ApiResponse::<Value>::error("account_deleted", auth.to_string())),
            AuthError::SocialLoginFailed { .. } => HttpResponse::Unauthorized()
                .json(ApiResponse::<Value>::error("social_login_failed", auth.to_string())),
        },

        DomainError::Otp(otp) => {
            let code = match otp {
                OtpError::AlreadyVerified => "already_verified",
                OtpError::CodeMismatch => "code_mismatch",
                OtpError::CodeExpired => "code_expired",
            };
            HttpResponse::BadRequest().json(ApiResponse::<Value>::error(code, otp.to_string()))
        }

        DomainError::Token(token) => match token {
            TokenError::TokenGenerationFailed => HttpResponse::InternalServerError()
                .json(ApiResponse::<Value>::error("internal_error", "Internal server error")),
            other => {
                let code = match other {
                    TokenError::TokenExpired => "token_expired",
                    TokenError::TokenRevoked => "token_revoked",
                    _ => "invalid_token",
                };
                HttpResponse::Unauthorized().json(ApiResponse::<Value>::error(code, other.to_string()))
            }
        },

        DomainError::Database { .. } | DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ApiResponse::<Value>::error("internal_error", "Internal server error")),
    }
}
