//! Email delivery over SMTP.

mod smtp;

pub use smtp::SmtpMailer;
