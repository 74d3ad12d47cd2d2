//! Authentication DTOs with request validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/otp/send
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OtpSendRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    /// Operation name: "email" or "password-reset"
    #[validate(length(min = 1, message = "Operation is required"))]
    pub operation: String,
}

/// Request body for POST /api/v1/auth/otp/verify
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OtpVerifyRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Operation is required"))]
    pub operation: String,

    #[validate(length(equal = 6, message = "Code must be exactly 6 digits"))]
    pub code: String,
}

/// Request body for POST /api/v1/auth/password/change
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Request body for POST /api/v1/auth/social-login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SocialLoginRequest {
    /// Provider name: "google" or "facebook"
    #[validate(length(min = 1, message = "Provider is required"))]
    pub provider: String,

    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
}

/// Session token payload returned by register, login, verify, refresh
/// and social-login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}
