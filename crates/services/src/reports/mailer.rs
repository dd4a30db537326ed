use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::MailConfig;
use crate::error::MailError;

/// Fire-and-forget delivery of a finished report to the instructor.
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// Deliver one report.
    ///
    /// # Errors
    ///
    /// Returns `MailError` if the message cannot be built or the transport fails.
    async fn send_report(&self, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Used when no SMTP credentials are configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledMailer;

#[async_trait]
impl ReportMailer for DisabledMailer {
    async fn send_report(&self, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::Disabled)
    }
}

/// Submits reports over implicit-TLS SMTP to a single fixed recipient.
#[derive(Clone, Debug)]
pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    #[must_use]
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, subject: &str, body: &str) -> Result<Message, MailError> {
        let from = parse_mailbox(&self.config.sender)?;
        let to = parse_mailbox(&self.config.recipient)?;
        Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.parse::<Mailbox>()
        .map_err(|e| MailError::Address(format!("{raw}: {e}")))
}

#[async_trait]
impl ReportMailer for SmtpMailer {
    async fn send_report(&self, subject: &str, body: &str) -> Result<(), MailError> {
        let message = self.build_message(subject, body)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.sender.clone(),
                self.config.password.clone(),
            ))
            .build();

        transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        info!(recipient = %self.config.recipient, "report mailed");
        Ok(())
    }
}
