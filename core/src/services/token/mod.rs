//! Session token issuance, validation, rotation, and revocation.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
