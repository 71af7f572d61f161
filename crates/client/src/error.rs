//! Client error types

use crate::types::{ApiErrorBody, ErrorMessage};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server rejected the request; the message is already display-ready
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build an API error from a raw error body, falling back to a
    /// per-operation message when the backend did not provide one.
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        Self::Api {
            status,
            message: normalize_error_message(body, fallback),
        }
    }

    /// True when the request was rejected for a missing or invalid token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

/// Extract the user-facing message from a backend error body.
///
/// A list of messages becomes a bulleted string joined with newlines, a
/// scalar message is used directly, and an absent or unparseable message
/// falls back to the caller's default.
pub fn normalize_error_message(body: &str, fallback: &str) -> String {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
    match parsed.and_then(|body| body.message) {
        Some(ErrorMessage::Many(messages)) => format!("• {}", messages.join("\n• ")),
        Some(ErrorMessage::One(message)) if !message.is_empty() => message,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_message_is_used_directly() {
        let body = r#"{"message":"Email already registered"}"#;
        assert_eq!(
            normalize_error_message(body, "Signup failed"),
            "Email already registered"
        );
    }

    #[test]
    fn message_list_is_bullet_joined() {
        let body = r#"{"message":["A","B"]}"#;
        assert_eq!(normalize_error_message(body, "fallback"), "• A\n• B");
    }

    #[test]
    fn three_messages_keep_their_order() {
        let body = r#"{"message":["email must be an email","password too short","lastName should not be empty"]}"#;
        assert_eq!(
            normalize_error_message(body, "fallback"),
            "• email must be an email\n• password too short\n• lastName should not be empty"
        );
    }

    #[test]
    fn missing_message_falls_back() {
        assert_eq!(
            normalize_error_message(r#"{"statusCode":401}"#, "Invalid credentials"),
            "Invalid credentials"
        );
    }

    #[test]
    fn empty_message_falls_back() {
        assert_eq!(
            normalize_error_message(r#"{"message":""}"#, "Invalid credentials"),
            "Invalid credentials"
        );
    }

    #[test]
    fn unparseable_body_falls_back() {
        assert_eq!(
            normalize_error_message("<html>502</html>", "Invalid credentials"),
            "Invalid credentials"
        );
    }

    #[test]
    fn api_error_displays_bare_message() {
        let error = ClientError::from_error_body(400, r#"{"message":["A","B"]}"#, "fallback");
        assert_eq!(error.to_string(), "• A\n• B");
    }

    #[test]
    fn unauthorized_predicate() {
        let error = ClientError::from_error_body(401, "{}", "Invalid credentials");
        assert!(error.is_unauthorized());
        let error = ClientError::from_error_body(400, "{}", "Signup failed");
        assert!(!error.is_unauthorized());
    }
}
