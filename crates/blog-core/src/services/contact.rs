//! Contact form relay.
//!
//! Submissions are checked, then forwarded to the mail transport on a
//! best-effort basis: a failed or slow delivery is logged and the
//! submission still counts as accepted.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::mask_email;
use crate::error::DomainError;
use crate::ports::{MailTransport, OutgoingMail};

/// A contact form submission. Fields are optional because browsers may
/// omit them entirely.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// What happened to an accepted submission's email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
}

struct CheckedMessage<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

impl ContactMessage {
    fn check(&self) -> Result<CheckedMessage<'_>, DomainError> {
        fn required<'a>(field: &'a Option<String>, label: &str) -> Result<&'a str, DomainError> {
            field
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| DomainError::Validation(format!("{label} is required")))
        }

        let checked = CheckedMessage {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            phone: required(&self.phone, "Phone")?,
            message: required(&self.message, "Message")?,
        };
        // Deliberately loose: any address with an "@" and a "." passes.
        if !checked.email.contains('@') || !checked.email.contains('.') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        Ok(checked)
    }
}

/// Validates contact submissions and relays them by mail.
pub struct ContactRelay {
    transport: Arc<dyn MailTransport>,
    site_owner: String,
    timeout: Duration,
}

impl ContactRelay {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        site_owner: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            site_owner: site_owner.into(),
            timeout,
        }
    }

    /// Accept or reject a submission. Rejected submissions never reach the
    /// transport; accepted ones are sent and the outcome only reported back.
    pub async fn submit(&self, submission: ContactMessage) -> Result<Delivery, DomainError> {
        let checked = submission.check().inspect_err(|e| {
            tracing::warn!(error = %e, "Contact form submission rejected");
        })?;

        let mail = OutgoingMail {
            subject: format!("New Contact Form Submission for {}'s Blog", self.site_owner),
            body: format!(
                "Name: {}\nEmail: {}\nPhone: {}\nMessage: {}",
                checked.name, checked.email, checked.phone, checked.message
            ),
            reply_to: Some(checked.email.to_string()),
        };

        tracing::info!(name = checked.name, email = %mask_email(checked.email), "Contact form submitted");

        let delivery = match tokio::time::timeout(self.timeout, self.transport.send(mail)).await {
            Ok(Ok(())) => {
                tracing::info!("Contact email sent");
                Delivery::Sent
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Failed to send contact email");
                Delivery::Failed
            }
            Err(_) => {
                tracing::error!(timeout = ?self.timeout, "Contact email timed out");
                Delivery::Failed
            }
        };
        Ok(delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MailError, MockMailTransport};
    use async_trait::async_trait;
    use rstest::rstest;

    fn submission() -> ContactMessage {
        ContactMessage {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            message: Some("Hello there".to_string()),
        }
    }

    fn relay(transport: MockMailTransport) -> ContactRelay {
        ContactRelay::new(Arc::new(transport), "Siris", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn accepted_submission_is_mailed() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_send()
            .withf(|mail| {
                mail.subject == "New Contact Form Submission for Siris's Blog"
                    && mail.body.contains("Name: Ada\n")
                    && mail.body.contains("Phone: 555-0100\n")
                    && mail.body.ends_with("Message: Hello there")
                    && mail.reply_to.as_deref() == Some("ada@example.com")
            })
            .times(1)
            .returning(|_| Ok(()));

        let outcome = relay(transport).submit(submission()).await.unwrap();

        assert_eq!(outcome, Delivery::Sent);
    }

    #[rstest]
    #[case::missing_name(ContactMessage { name: None, ..submission() })]
    #[case::missing_phone(ContactMessage { phone: None, ..submission() })]
    #[case::blank_message(ContactMessage { message: Some("   ".to_string()), ..submission() })]
    #[case::email_without_at(ContactMessage { email: Some("ada.example.com".to_string()), ..submission() })]
    #[case::email_without_dot(ContactMessage { email: Some("ada@example".to_string()), ..submission() })]
    #[tokio::test]
    async fn rejected_submission_never_reaches_transport(#[case] message: ContactMessage) {
        let mut transport = MockMailTransport::new();
        transport.expect_send().times(0);

        let result = relay(transport).submit(message).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn transport_failure_still_accepts() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::Transport("connection refused".to_string())));

        let outcome = relay(transport).submit(submission()).await.unwrap();

        assert_eq!(outcome, Delivery::Failed);
    }

    struct HangingTransport;

    #[async_trait]
    impl MailTransport for HangingTransport {
        async fn send(&self, _mail: OutgoingMail) -> Result<(), MailError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_transport_is_cut_off() {
        let relay = ContactRelay::new(Arc::new(HangingTransport), "Siris", Duration::from_secs(2));

        let outcome = relay.submit(submission()).await.unwrap();

        assert_eq!(outcome, Delivery::Failed);
    }
}
