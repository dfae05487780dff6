//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the database, password hashing and mail relay
//! integrations, plus in-memory stores used when no database is configured.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `database` - SQLite/PostgreSQL persistence via SeaORM
//! - `auth` - Argon2 password hashing
//! - `mail` - HTTP mail relay client via reqwest

pub mod memory;

#[cfg(feature = "database")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "mail")]
pub mod mail;

// Re-exports - In-Memory
pub use memory::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, SeaOrmPostRepository, SeaOrmUserRepository};

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;

#[cfg(feature = "mail")]
pub use mail::{HttpMailRelay, MailRelayConfig};
