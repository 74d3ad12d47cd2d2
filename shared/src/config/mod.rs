//! Environment-driven configuration for every layer of the backend.

pub mod database;
pub mod jwt;
pub mod mailer;
pub mod server;

pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use mailer::MailerConfig;
pub use server::ServerConfig;
