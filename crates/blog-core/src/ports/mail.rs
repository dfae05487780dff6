//! Mail transport port - abstraction over the service that delivers
//! contact messages.

use std::time::Duration;

use async_trait::async_trait;

/// A message ready to be handed to the transport. Sender and recipient are
/// the transport's own configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub subject: String,
    pub body: String,
    /// Address of the visitor, so the owner can answer directly.
    pub reply_to: Option<String>,
}

/// Mail transport trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver a message.
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// Mail delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport misconfigured: {0}")]
    Configuration(String),

    #[error("Mail transport failed: {0}")]
    Transport(String),

    #[error("Mail relay rejected message with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Mail transport timed out after {0:?}")]
    Timeout(Duration),
}
