//! Services - the operations the route layer calls.
//!
//! Guarded operations take the caller's session identity as an explicit
//! argument and check it with [`require_session`].

mod auth_gate;
mod contact;
mod posts;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_gate::{AuthGate, require_session};
pub use contact::{ContactMessage, ContactRelay, Delivery};
pub use posts::PostService;
