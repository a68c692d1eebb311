//! Error taxonomy for calls to the REST backend

use contracts::shared::error_body::{ErrorBody, FieldErrorItem};
use thiserror::Error;

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&FieldErrorItem> for FieldError {
    fn from(item: &FieldErrorItem) -> Self {
        Self {
            field: item.field_path(),
            message: item.msg.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received
    #[error("network error (timeout: {timeout})")]
    Network { timeout: bool },

    /// Structured 422-style field errors
    #[error("validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Any other non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Client-side validation; never sent to the backend
    #[error("{0}")]
    Local(String),
}

impl ApiError {
    /// Build an error from a non-2xx status and the (possibly empty) body text
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();

        if let Some(fields) = parsed.as_ref().and_then(|b| b.field_errors()) {
            return ApiError::Validation(fields.iter().map(FieldError::from).collect());
        }

        let detail = parsed.as_ref().and_then(|b| b.text()).map(str::to_string);
        ApiError::Status { status, detail }
    }

    /// Map a transport failure; the browser reports aborted/timed out
    /// requests with a message mentioning the timeout
    pub fn from_transport(message: &str) -> Self {
        let lower = message.to_lowercase();
        ApiError::Network {
            timeout: lower.contains("timeout") || lower.contains("timed out"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Validation(_) => Some(422),
            _ => None,
        }
    }

    /// Text shown to the user in notifications and inline form errors
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { timeout: true } => {
                "The server took too long to respond. Please try again.".to_string()
            }
            ApiError::Network { timeout: false } => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Validation(fields) => fields
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect::<Vec<_>>()
                .join("; "),
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { status, detail: None } => status_message(*status).to_string(),
            ApiError::Decode(_) => "The server returned an unexpected response.".to_string(),
            ApiError::Local(msg) => msg.clone(),
        }
    }
}

/// Fixed message per HTTP status when the body carries no detail
pub fn status_message(status: u16) -> &'static str {
    match status {
        401 => "Your session has expired. Please sign in again.",
        403 => "You do not have permission to perform this action.",
        404 => "The requested record was not found.",
        409 => "This record conflicts with an existing one.",
        422 => "Some fields are invalid. Please review the form.",
        500 => "Internal server error. Please try again later.",
        501..=599 => "The server is temporarily unavailable. Please try again later.",
        _ => "Request failed. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_is_concatenated() {
        let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required"},{"loc":["body","gst_rate"],"msg":"must be >= 0"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.user_message(), "name: field required; gst_rate: must be >= 0");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_detail_text_wins_over_status_text() {
        let err = ApiError::from_response(409, r#"{"detail":"Code 3004 already exists"}"#);
        assert_eq!(err.user_message(), "Code 3004 already exists");
    }

    #[test]
    fn test_message_field_is_used() {
        let err = ApiError::from_response(400, r#"{"message":"Warehouse is closed"}"#);
        assert_eq!(err.user_message(), "Warehouse is closed");
    }

    #[test]
    fn test_fixed_status_messages() {
        assert_eq!(
            ApiError::from_response(404, "").user_message(),
            "The requested record was not found."
        );
        assert_eq!(
            ApiError::from_response(403, "<html>").user_message(),
            "You do not have permission to perform this action."
        );
        assert_eq!(status_message(503), status_message(502));
        assert_ne!(status_message(500), status_message(503));
    }

    #[test]
    fn test_transport_timeout_subcase() {
        assert_eq!(
            ApiError::from_transport("Request timed out"),
            ApiError::Network { timeout: true }
        );
        assert_eq!(
            ApiError::from_transport("TypeError: Failed to fetch"),
            ApiError::Network { timeout: false }
        );
        assert!(ApiError::Network { timeout: true }
            .user_message()
            .contains("too long"));
    }
}
