//! Content of the status pages shown when a request fails.
//!
//! Field names follow RFC 7807 Problem Details so the same payload can be
//! served as JSON.

use serde::{Deserialize, Serialize};

/// Problem details for a failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub status: u16,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(409, "Conflict").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": 500, "title": "Internal Server Error"})
        );
    }

    #[test]
    fn not_found_carries_detail() {
        let error = ErrorResponse::not_found("Post not found");

        assert_eq!(error.status, 404);
        assert_eq!(error.detail.as_deref(), Some("Post not found"));
    }
}
