//! Mail delivery through a transactional-mail HTTP API.
//!
//! Messages are POSTed as JSON with a bearer credential; any 2xx status
//! counts as delivered.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use blog_core::ports::{MailError, MailTransport, OutgoingMail};

/// Relay endpoint, credential and the fixed sender/recipient pair.
#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    pub endpoint: String,
    pub api_key: String,
    pub from_address: String,
    pub to_address: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// reqwest-based mail transport.
pub struct HttpMailRelay {
    client: reqwest::Client,
    config: MailRelayConfig,
}

impl HttpMailRelay {
    pub fn new(config: MailRelayConfig) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn payload<'a>(&'a self, mail: &'a OutgoingMail) -> RelayPayload<'a> {
        RelayPayload {
            from: &self.config.from_address,
            to: &self.config.to_address,
            subject: &mail.subject,
            text: &mail.body,
            reply_to: mail.reply_to.as_deref(),
        }
    }
}

#[async_trait]
impl MailTransport for HttpMailRelay {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.payload(&mail))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailError::Timeout(self.config.timeout)
                } else {
                    MailError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::debug!(status = status.as_u16(), "Mail relay accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> MailRelayConfig {
        MailRelayConfig {
            endpoint: endpoint.to_string(),
            api_key: "key".to_string(),
            from_address: "blog@example.com".to_string(),
            to_address: "owner@example.com".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    fn mail() -> OutgoingMail {
        OutgoingMail {
            subject: "Hello".to_string(),
            body: "Name: Ada".to_string(),
            reply_to: Some("ada@example.com".to_string()),
        }
    }

    #[test]
    fn test_payload_shape() {
        let relay = HttpMailRelay::new(config("https://mail.example.com/send")).unwrap();
        let mail = mail();

        let json = serde_json::to_value(relay.payload(&mail)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "from": "blog@example.com",
                "to": "owner@example.com",
                "subject": "Hello",
                "text": "Name: Ada",
                "reply_to": "ada@example.com",
            })
        );
    }

    #[test]
    fn test_payload_omits_missing_reply_to() {
        let relay = HttpMailRelay::new(config("https://mail.example.com/send")).unwrap();
        let mail = OutgoingMail {
            reply_to: None,
            ..mail()
        };

        let json = serde_json::to_value(relay.payload(&mail)).unwrap();

        assert!(json.get("reply_to").is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint_fails_without_network() {
        let relay = HttpMailRelay::new(config("<unset MAIL_API_URL>")).unwrap();

        let result = relay.send(mail()).await;

        assert!(matches!(result, Err(MailError::Transport(_))));
    }
}
