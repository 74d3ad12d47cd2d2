//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mailer;
pub mod otp;
pub mod password;
pub mod social;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, RegisterCredentials};
pub use mailer::{MailerError, MailerService};
pub use otp::{OtpService, OtpServiceConfig};
pub use password::PasswordService;
pub use social::{
    SocialFetchError, SocialLoginService, SocialProfile, SocialProfileFetcher, SocialProvider,
};
pub use token::{TokenService, TokenServiceConfig};
