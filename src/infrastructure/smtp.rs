use crate::domain::ports::delivery::{DeliveryError, MailSink};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP digest mailer over a STARTTLS relay (Gmail by default).
pub struct SmtpMailer {
    relay: String,
    sender: String,
    password: String,
    receiver: String,
}

impl SmtpMailer {
    pub fn new(sender: String, password: String, receiver: String) -> Self {
        Self {
            relay: "smtp.gmail.com".to_string(),
            sender,
            password,
            receiver,
        }
    }

    pub fn with_relay(mut self, relay: impl Into<String>) -> Self {
        self.relay = relay.into();
        self
    }
}

#[async_trait::async_trait]
impl MailSink for SmtpMailer {
    async fn deliver(&self, html: &str, subject: &str) -> Result<(), DeliveryError> {
        let message = Message::builder()
            .from(
                self.sender
                    .parse()
                    .map_err(|e| DeliveryError::Config(format!("sender address: {e}")))?,
            )
            .to(self
                .receiver
                .parse()
                .map_err(|e| DeliveryError::Config(format!("receiver address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| DeliveryError::Config(e.to_string()))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.relay)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .credentials(Credentials::new(self.sender.clone(), self.password.clone()))
            .build();

        mailer
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bad_sender_address_is_config_error() {
        let mailer = SmtpMailer::new("not-an-address".into(), "pw".into(), "to@example.com".into());
        assert!(matches!(
            mailer.deliver("<p>x</p>", "subject").await,
            Err(DeliveryError::Config(_))
        ));
    }
}
