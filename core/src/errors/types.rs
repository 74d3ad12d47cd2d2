//! Error type definitions for authentication, OTP verification, and token
//! management. Transport-level status codes are assigned in the API layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account has been deleted")]
    AccountDeleted,

    #[error("Social login failed: {reason}")]
    SocialLoginFailed { reason: String },
}

/// OTP lifecycle errors
///
/// Mismatch and expiry are deliberately distinct so callers can give
/// precise feedback; expiry is only reported for a code that matched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OtpError {
    #[error("User is already verified")]
    AlreadyVerified,

    #[error("OTP did not match")]
    CodeMismatch,

    #[error("OTP has expired")]
    CodeExpired,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
