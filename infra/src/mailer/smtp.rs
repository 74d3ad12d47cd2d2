//! SMTP mailer built on lettre's async transport.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use ob_core::services::mailer::{MailerError, MailerService};
use ob_shared::config::MailerConfig;

/// Sends transactional email through a relay configured via [`MailerConfig`].
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a STARTTLS transport from the configuration.
    pub fn new(config: &MailerConfig) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .from_address
            .parse()
            .map_err(|_| MailerError::InvalidRecipient(config.from_address.clone()))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailerService for SmtpMailer {
    async fn send_otp_email(
        &self,
        recipient: &str,
        first_name: &str,
        code: u32,
    ) -> Result<(), MailerError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|_| MailerError::InvalidRecipient(recipient.to_string()))?;

        let body = format!(
            "Hi {first_name},\n\n\
             Your Onboardly verification code is {code:06}.\n\n\
             The code expires in one minute. If you did not request it,\n\
             you can ignore this message.\n"
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your Onboardly verification code")
            .body(body)
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        tracing::debug!(recipient = %recipient, event = "otp_email_sent", "verification email accepted by relay");
        Ok(())
    }
}
