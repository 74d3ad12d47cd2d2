//! OTP lifecycle: issuing one-time codes and verifying them, including
//! the account-activation effect that follows a successful match.

mod config;
mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
