//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error body returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,

    /// Request correlation ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Add the request correlation ID for tracing
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody::new("not_found", "The requested resource was not found")
            .with_request_id("req-123");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["request_id"], "req-123");
    }

    #[test]
    fn test_request_id_omitted_when_absent() {
        let body = ErrorBody::new("internal_error", "boom");
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("request_id").is_none());
    }
}
