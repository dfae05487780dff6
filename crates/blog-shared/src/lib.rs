//! # Blog Shared
//!
//! Form payloads and status-page content shared by the handlers and the
//! templates.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
