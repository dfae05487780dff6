//! # Blog Core
//!
//! The domain layer of the blog.
//! Slug derivation, post presentation, authentication rules and the contact
//! relay live here, with persistence, hashing and mail delivery behind ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{AuthGate, ContactRelay, PostService};
