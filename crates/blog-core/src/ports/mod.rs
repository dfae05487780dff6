//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod mail;
mod repository;

pub use auth::{AuthError, PasswordService};
pub use mail::{MailError, MailTransport, OutgoingMail};
pub use repository::{BaseRepository, PostRepository, UserRepository};

#[cfg(test)]
pub use mail::MockMailTransport;
