//! # API error taxonomy
//!
//! Every service call returns [`ApiError`]. Pages turn it into an inline message with
//! [`ApiError::display_message`], passing the fallback string for the operation that
//! failed (one of the constants below). The edit page also checks
//! [`ApiError::is_not_found`] to tell a missing entry apart from a failed load.
//!
//! ## Message derivation
//!
//! For a non-2xx response the server body is kept as an [`ErrorBody`]:
//!
//! | Body | Message shown |
//! |------|---------------|
//! | plain text (or a JSON string) | the text itself |
//! | JSON object | its `message` field, else its `title` field, else the fallback |
//! | empty or anything else | the fallback |
//!
//! Transport and decode failures always show the fallback.

use reqwest::StatusCode;
use serde_json::Value;
use store::ValidationError;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOAD_ENTRIES_FAILED: &str = "Failed to load entries";
pub const LOAD_ENTRY_FAILED: &str = "Failed to load entry";
pub const CREATE_ENTRY_FAILED: &str = "Failed to create entry";
pub const UPDATE_ENTRY_FAILED: &str = "Failed to update entry";
pub const DELETE_ENTRY_FAILED: &str = "Failed to delete entry";
pub const ENTRY_NOT_FOUND: &str = "Entry not found";

/// Body of a non-success response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    Empty,
    Text(String),
    Json(Value),
}

impl ErrorBody {
    /// Classify a raw response body.
    pub fn from_text(raw: String) -> Self {
        if raw.trim().is_empty() {
            return ErrorBody::Empty;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::String(text)) => ErrorBody::Text(text),
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(raw),
        }
    }

    /// Human-readable message carried by the body, if any.
    pub fn message(&self) -> Option<&str> {
        let non_empty = |s: &&str| !s.is_empty();
        match self {
            ErrorBody::Empty => None,
            ErrorBody::Text(text) => Some(text.as_str()).filter(non_empty),
            ErrorBody::Json(value) => ["message", "title"]
                .iter()
                .find_map(|field| value.get(field).and_then(Value::as_str).filter(non_empty)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server responded {status}")]
    Server { status: StatusCode, body: ErrorBody },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Message to show the user, falling back to `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { body, .. } => body.message().unwrap_or(fallback).to_string(),
            ApiError::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server(status: StatusCode, raw: &str) -> ApiError {
        ApiError::Server {
            status,
            body: ErrorBody::from_text(raw.to_string()),
        }
    }

    #[test]
    fn test_body_classification() {
        assert_eq!(ErrorBody::from_text(String::new()), ErrorBody::Empty);
        assert_eq!(ErrorBody::from_text("  \n".to_string()), ErrorBody::Empty);
        assert_eq!(
            ErrorBody::from_text("Invalid credentials".to_string()),
            ErrorBody::Text("Invalid credentials".to_string())
        );
        assert_eq!(
            ErrorBody::from_text("\"User already exists\"".to_string()),
            ErrorBody::Text("User already exists".to_string())
        );
        assert_eq!(
            ErrorBody::from_text(r#"{"message":"nope"}"#.to_string()),
            ErrorBody::Json(json!({"message": "nope"}))
        );
    }

    #[test]
    fn test_message_prefers_message_then_title() {
        let both = server(StatusCode::BAD_REQUEST, r#"{"message":"Email taken","title":"Bad Request"}"#);
        assert_eq!(both.display_message(REGISTRATION_FAILED), "Email taken");

        let title_only = server(StatusCode::BAD_REQUEST, r#"{"title":"One or more validation errors occurred.","status":400}"#);
        assert_eq!(
            title_only.display_message(CREATE_ENTRY_FAILED),
            "One or more validation errors occurred."
        );

        let empty_message = server(StatusCode::BAD_REQUEST, r#"{"message":"","title":"Bad Request"}"#);
        assert_eq!(empty_message.display_message(LOGIN_FAILED), "Bad Request");
    }

    #[test]
    fn test_message_falls_back() {
        let neither = server(StatusCode::INTERNAL_SERVER_ERROR, r#"{"errors":["x"]}"#);
        assert_eq!(neither.display_message(LOAD_ENTRIES_FAILED), LOAD_ENTRIES_FAILED);

        let empty = server(StatusCode::UNAUTHORIZED, "");
        assert_eq!(empty.display_message(LOGIN_FAILED), LOGIN_FAILED);

        let number = server(StatusCode::BAD_GATEWAY, "502");
        assert_eq!(number.display_message(DELETE_ENTRY_FAILED), DELETE_ENTRY_FAILED);

        let url = ApiError::InvalidBaseUrl("::".to_string());
        assert_eq!(url.display_message(LOGIN_FAILED), LOGIN_FAILED);
    }

    #[test]
    fn test_plain_text_body_is_shown_verbatim() {
        let err = server(StatusCode::UNAUTHORIZED, "Invalid email or password");
        assert_eq!(err.display_message(LOGIN_FAILED), "Invalid email or password");
    }

    #[test]
    fn test_validation_message() {
        let err = ApiError::from(ValidationError::Required("title"));
        assert_eq!(err.display_message(CREATE_ENTRY_FAILED), "title is required");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_classification() {
        assert!(server(StatusCode::NOT_FOUND, "").is_not_found());
        assert!(!server(StatusCode::NOT_FOUND, "").is_unauthorized());
        assert!(server(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(!ApiError::InvalidBaseUrl(String::new()).is_not_found());
    }
}
