//! # Infrastructure Layer
//!
//! Concrete implementations behind the ob_core abstractions:
//! - **Database**: MySQL repositories using SQLx
//! - **Mailer**: SMTP delivery through lettre
//! - **Social**: provider profile lookup over HTTP

pub mod database;
pub mod mailer;
pub mod social;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlOtpRepository, MySqlTokenRepository, MySqlUserRepository};
pub use mailer::SmtpMailer;
pub use social::HttpProfileFetcher;
