//! Outbound mail for the relay: SMTP via lettre.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use secrecy::ExposeSecret;

use crate::config::RelayConfig;
use crate::error::MailError;
use crate::submission::SubmissionPayload;

/// A plain-text email ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub subject: String,
    pub body: String,
    /// Applicant address, used as Reply-To when it parses.
    pub reply_to: Option<String>,
}

impl OutboundMail {
    /// Build the notification email for one join submission.
    pub fn for_submission(subject: &str, payload: &SubmissionPayload) -> Self {
        let reply_to = Some(payload.email.trim().to_string()).filter(|e| !e.is_empty());
        Self {
            subject: subject.to_string(),
            body: format_submission(payload),
            reply_to,
        }
    }
}

/// Plain-text body listing every submitted field, one `Label: value` per line.
pub fn format_submission(payload: &SubmissionPayload) -> String {
    let lines = [
        ("Name", payload.full_name.clone()),
        ("Gender", payload.gender.clone()),
        ("Age", payload.age.clone()),
        ("Occupation", payload.occupation.clone()),
        ("Email", payload.email.clone()),
        ("Phone", payload.phone.clone()),
        ("State", payload.state.clone()),
        ("District", payload.district.clone()),
        ("Address", payload.address.clone()),
        ("Interests", payload.interests.join(", ")),
        ("Issues", payload.issues.join(", ")),
        ("How Heard", payload.how_heard.clone()),
        ("Comments", payload.comments.clone()),
        (
            "Newsletter Subscription",
            if payload.newsletter { "Yes" } else { "No" }.to_string(),
        ),
    ];

    lines
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

/// Sends relay mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutboundMail) -> Result<(), MailError>;
}

/// SMTP mailer over a STARTTLS relay with account credentials.
pub struct SmtpMailer {
    config: RelayConfig,
}

impl SmtpMailer {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, mail: &OutboundMail) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(&self.config.from_address)?)
            .to(parse_mailbox(&self.config.to_address)?)
            .subject(mail.subject.clone());

        // An unparsable applicant address is not worth failing the send over.
        if let Some(reply_to) = mail.reply_to.as_deref()
            && let Ok(mailbox) = reply_to.parse::<Mailbox>()
        {
            builder = builder.reply_to(mailbox);
        }

        builder
            .body(mail.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }

    fn transport(&self) -> Result<SmtpTransport, MailError> {
        let creds = Credentials::new(
            self.config.username.clone(),
            self.config.password.expose_secret().to_string(),
        );

        Ok(SmtpTransport::starttls_relay(&self.config.smtp_host)
            .map_err(|e| MailError::Transport(format!("SMTP relay error: {e}")))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutboundMail) -> Result<(), MailError> {
        let email = self.build_message(&mail)?;
        let transport = self.transport()?;

        // lettre's SmtpTransport blocks.
        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(|e| MailError::Transport(format!("send task failed: {e}")))?
            .map_err(|e| MailError::Transport(format!("SMTP send failed: {e}")))?;

        tracing::info!(to = %self.config.to_address, subject = %mail.subject, "Relay email sent");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            full_name: "Ana Sen".into(),
            gender: "female".into(),
            email: "ana@example.com".into(),
            state: "WB".into(),
            district: "kolkata".into(),
            interests: vec!["volunteer".into(), "donate".into()],
            newsletter: true,
            ..Default::default()
        }
    }

    fn config(from: &str) -> RelayConfig {
        RelayConfig {
            port: 5000,
            smtp_host: "smtp.example.com".into(),
            smtp_port: 587,
            username: from.into(),
            password: SecretString::from("secret".to_string()),
            from_address: from.into(),
            to_address: from.into(),
            subject: "New Join Form Submission".into(),
        }
    }

    #[test]
    fn body_lists_every_field() {
        let body = format_submission(&payload());
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Name: Ana Sen");
        assert_eq!(lines[2], "Age: ");
        assert!(lines.contains(&"Interests: volunteer, donate"));
        assert!(lines.contains(&"Issues: "));
        assert_eq!(lines[13], "Newsletter Subscription: Yes");
    }

    #[test]
    fn mail_for_submission_sets_reply_to() {
        let mail = OutboundMail::for_submission("Subject", &payload());
        assert_eq!(mail.reply_to.as_deref(), Some("ana@example.com"));

        let anonymous = SubmissionPayload::default();
        assert!(OutboundMail::for_submission("Subject", &anonymous).reply_to.is_none());
    }

    #[test]
    fn builds_message_with_headers() {
        let mailer = SmtpMailer::new(config("join@party.in"));
        let mail = OutboundMail::for_submission("New Join Form Submission", &payload());
        let message = mailer.build_message(&mail).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: New Join Form Submission"));
        assert!(raw.contains("Reply-To: ana@example.com"));
        assert!(raw.contains("To: join@party.in"));
    }

    #[test]
    fn bad_applicant_address_is_skipped() {
        let mailer = SmtpMailer::new(config("join@party.in"));
        let mail = OutboundMail {
            subject: "s".into(),
            body: "b".into(),
            reply_to: Some("not an address".into()),
        };
        let raw = String::from_utf8(mailer.build_message(&mail).unwrap().formatted()).unwrap();
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn bad_relay_address_is_an_error() {
        let mailer = SmtpMailer::new(config("nope"));
        let mail = OutboundMail::for_submission("s", &payload());
        assert!(matches!(
            mailer.build_message(&mail),
            Err(MailError::InvalidAddress { .. })
        ));
    }
}
