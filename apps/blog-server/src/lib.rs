//! # Blog Server
//!
//! Actix-web application serving the blog pages, the admin post editor and
//! the contact form.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
pub mod templates;

pub use config::AppConfig;
pub use state::AppState;
