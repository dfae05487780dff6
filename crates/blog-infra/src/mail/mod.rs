//! Mail transport implementations.

mod http_relay;

pub use http_relay::{HttpMailRelay, MailRelayConfig};
