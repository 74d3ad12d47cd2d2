//! Repository interfaces and in-memory mocks.

pub mod otp;
pub mod token;
pub mod user;

pub use otp::{ActivationEffect, MockOtpRepository, OtpRepository};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
