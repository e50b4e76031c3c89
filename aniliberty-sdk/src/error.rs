//! Error types for the AniLiberty SDK

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// API Error Payload
// ============================================================================

/// Error payload carried by a failed [`ApiResponse`](crate::ApiResponse)
///
/// Non-2xx responses with a JSON body are surfaced verbatim: `message` for
/// server errors, `errors` for field-level validation failures. Transport
/// failures (status 0) carry only a `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Validation messages keyed by field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<IndexMap<String, Vec<String>>>,
}

impl ApiError {
    /// Create an error with only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Generic error used when a failed response has no structured body
    pub fn http_status(status: u16) -> Self {
        Self::new(format!("HTTP Error {}", status))
    }

    /// Error for a call that did not finish within the configured timeout
    pub fn timed_out(timeout: Duration) -> Self {
        Self::new(format!(
            "Request aborted: no response within {}ms",
            timeout.as_millis()
        ))
    }

    /// Classify a transport-level reqwest failure
    pub fn from_reqwest_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            Self::new(format!("Connection failed: {}", err))
        } else if err.is_decode() || err.is_body() {
            Self::new(format!("Failed to read response body: {}", err))
        } else if err.is_request() {
            Self::new(format!("Request failed: {}", err))
        } else {
            Self::new(err.to_string())
        }
    }

    /// Interpret a parsed JSON body as a structured error
    ///
    /// Returns `None` unless the body is an object with a string `message`
    /// and/or an `errors` map of field names to message lists.
    pub(crate) fn from_body(body: &serde_json::Value) -> Option<Self> {
        let object = body.as_object()?;
        let message = object
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);
        let errors = object
            .get("errors")
            .filter(|e| e.is_object())
            .and_then(|e| serde_json::from_value::<IndexMap<String, Vec<String>>>(e.clone()).ok());

        if message.is_none() && errors.is_none() {
            return None;
        }
        Some(Self { message, errors })
    }

    /// Returns true if the payload carries field-level validation messages
    pub fn is_validation(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Validation messages for one field
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors
            .as_ref()
            .and_then(|e| e.get(field))
            .map(Vec::as_slice)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            return f.write_str(message);
        }

        match &self.errors {
            Some(errors) if !errors.is_empty() => {
                let fields: Vec<String> = errors
                    .iter()
                    .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
                    .collect();
                write!(f, "Validation failed ({})", fields.join("; "))
            }
            _ => f.write_str("Unknown error"),
        }
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// SDK Error Types
// ============================================================================

/// Errors raised while constructing a client
///
/// Endpoint calls never return this type; they report failures through
/// [`ApiResponse::Failure`](crate::ApiResponse::Failure).
#[derive(Debug, Error)]
pub enum AniLibertyError {
    /// Invalid configuration (bad header, malformed environment value, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The underlying HTTP client could not be created
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_status_message() {
        let err = ApiError::http_status(503);
        assert_eq!(err.message.as_deref(), Some("HTTP Error 503"));
        assert!(err.errors.is_none());
    }

    #[test]
    fn test_timed_out_message() {
        let err = ApiError::timed_out(Duration::from_millis(50));
        assert_eq!(err.to_string(), "Request aborted: no response within 50ms");
    }

    #[test]
    fn test_from_body_message_only() {
        let err = ApiError::from_body(&json!({"message": "Server exploded"})).unwrap();
        assert_eq!(err.message.as_deref(), Some("Server exploded"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_body_validation_errors() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": {
                "login": ["The login field is required."],
                "password": ["Too short.", "Must contain a digit."]
            }
        });
        let err = ApiError::from_body(&body).unwrap();
        assert!(err.is_validation());
        assert_eq!(
            err.field_errors("password"),
            Some(&["Too short.".to_string(), "Must contain a digit.".to_string()][..])
        );
        assert!(err.field_errors("email").is_none());
    }

    #[test]
    fn test_from_body_errors_without_message() {
        let body = json!({"errors": {"email": ["Invalid email."]}});
        let err = ApiError::from_body(&body).unwrap();
        assert!(err.message.is_none());
        assert_eq!(err.to_string(), "Validation failed (email: Invalid email.)");
    }

    #[test]
    fn test_from_body_rejects_unstructured() {
        assert!(ApiError::from_body(&json!({"detail": "nope"})).is_none());
        assert!(ApiError::from_body(&json!("plain string")).is_none());
        assert!(ApiError::from_body(&json!({"message": 42})).is_none());
    }

    #[test]
    fn test_from_body_rejects_errors_without_message_lists() {
        assert!(ApiError::from_body(&json!({"errors": {"login": "Required"}})).is_none());
        assert!(ApiError::from_body(&json!({"errors": ["Required"]})).is_none());
    }

    #[test]
    fn test_from_body_keeps_message_when_errors_malformed() {
        let err = ApiError::from_body(&json!({
            "message": "Invalid data",
            "errors": {"login": "Required"}
        }))
        .unwrap();
        assert_eq!(err.message.as_deref(), Some("Invalid data"));
        assert!(err.errors.is_none());
    }

    #[test]
    fn test_display_prefers_message() {
        let err = ApiError::new("Unauthenticated.");
        assert_eq!(format!("{}", err), "Unauthenticated.");
    }

    #[test]
    fn test_display_empty_payload() {
        assert_eq!(ApiError::default().to_string(), "Unknown error");
    }

    #[test]
    fn test_configuration_error_display() {
        let err = AniLibertyError::Configuration("Invalid header name".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("Invalid header name"));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_value(ApiError::new("boom")).unwrap();
        assert_eq!(json, json!({"message": "boom"}));
    }
}
