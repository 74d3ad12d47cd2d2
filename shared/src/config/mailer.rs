//! SMTP mailer configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the outbound SMTP relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailerConfig {
    /// SMTP relay hostname
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// From address for outbound mail
    pub from_address: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@onboardly.app"),
        }
    }
}

impl MailerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.smtp_port),
            username: std::env::var("SMTP_USERNAME").unwrap_or(defaults.username),
            password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.password),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
        }
    }
}
