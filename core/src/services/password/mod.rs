//! Password management for authenticated accounts.

mod service;

pub use service::PasswordService;
