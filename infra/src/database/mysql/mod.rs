//! MySQL repository implementations.

mod otp_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use otp_repository_impl::MySqlOtpRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
