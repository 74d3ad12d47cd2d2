//! Request and response data transfer objects.

pub mod auth;

pub use auth::{
    ChangePasswordRequest, LoginRequest, OtpSendRequest, OtpVerifyRequest, RegisterRequest,
    SocialLoginRequest, TokenResponse,
};
