//! Domain entities.

pub mod otp;
pub mod token;
pub mod user;

pub use otp::Otp;
pub use token::Claims;
pub use user::User;
