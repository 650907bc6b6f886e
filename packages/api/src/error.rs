//! # Error taxonomy for backend calls
//!
//! | Variant | Cause | User-facing handling |
//! |---------|-------|----------------------|
//! | [`ApiError::Transport`] | No response received | "server did not respond" |
//! | [`ApiError::Http`] | Non-2xx response other than 401 | Message picked from the body by [`ErrorBody::message`] |
//! | [`ApiError::Unauthorized`] | 401 response | On sign-in, the backend's message; elsewhere never shown in-page because the client has already redirected to login |
//! | [`ApiError::InvalidLoginResponse`] | 2xx login without a token | Fixed message |
//! | [`ApiError::Validation`] | Client-side form validation failed | Field errors rendered next to the inputs |
//! | [`ApiError::Decode`] | Response body did not match the expected shape | Generic fallback |
//! | [`ApiError::Storage`] | Session could not be persisted | Generic fallback |
//!
//! Nothing is retried and nothing is fatal.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::i18n::Strings;

/// Field name → first error message for that field.
pub type FieldErrors = BTreeMap<String, String>;

/// Body keys that carry form-wide messages rather than per-field ones.
const NON_FIELD_KEYS: [&str; 3] = ["non_field_errors", "detail", "message"];

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("server did not respond: {0}")]
    Transport(String),

    #[error("request failed with status {status}")]
    Http { status: u16, body: ErrorBody },

    #[error("request was not authorized")]
    Unauthorized { body: ErrorBody },

    #[error("invalid login response")]
    InvalidLoginResponse,

    #[error("form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] store::StoreError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Per-field errors carried by this error, empty when there are none.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Validation(fields) => fields.clone(),
            ApiError::Http { body, .. } => body.field_errors(),
            _ => FieldErrors::new(),
        }
    }

    /// Message to show the user. `fallback` is used when the error carries no
    /// usable text of its own.
    pub fn user_message(&self, strings: &Strings, fallback: &str) -> String {
        match self {
            ApiError::Transport(_) => strings.server_unreachable.to_string(),
            ApiError::Http { body, .. } => body.message().unwrap_or_else(|| fallback.to_string()),
            ApiError::Unauthorized { body } => body
                .message()
                .unwrap_or_else(|| strings.session_expired.to_string()),
            ApiError::InvalidLoginResponse => strings.invalid_login_response.to_string(),
            ApiError::Validation(fields) => fields
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| fallback.to_string()),
            ApiError::Decode(_) | ApiError::Storage(_) => fallback.to_string(),
        }
    }
}

/// Parsed body of an error response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ErrorBody {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ErrorBody::Empty;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(s)) => ErrorBody::Text(s),
            Ok(Value::Null) => ErrorBody::Empty,
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(trimmed.to_string()),
        }
    }

    /// Field-specific errors: every object key except the form-wide ones.
    pub fn field_errors(&self) -> FieldErrors {
        let ErrorBody::Json(Value::Object(map)) = self else {
            return FieldErrors::new();
        };
        map.iter()
            .filter(|(key, _)| !NON_FIELD_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| first_message(value).map(|msg| (key.clone(), msg)))
            .collect()
    }

    /// Message by fixed precedence: field error, `non_field_errors`, `detail`,
    /// `message`. Plain-text bodies are returned as-is.
    pub fn message(&self) -> Option<String> {
        match self {
            ErrorBody::Text(text) => Some(text.clone()),
            ErrorBody::Empty => None,
            ErrorBody::Json(value) => {
                if let Some(msg) = self.field_errors().into_values().next() {
                    return Some(msg);
                }
                let Value::Object(map) = value else {
                    return first_message(value);
                };
                NON_FIELD_KEYS
                    .iter()
                    .find_map(|key| map.get(*key).and_then(first_message))
            }
        }
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        Value::Object(map) => map.values().find_map(first_message),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Strings;
    use serde_json::json;

    fn http(body: Value) -> ApiError {
        ApiError::Http {
            status: 400,
            body: ErrorBody::Json(body),
        }
    }

    #[test]
    fn test_field_error_wins() {
        let err = http(json!({
            "non_field_errors": ["Unable to log in"],
            "username": ["A user with that username already exists."],
        }));
        let strings = Strings::en();
        assert_eq!(
            err.user_message(strings, "fallback"),
            "A user with that username already exists."
        );
        assert_eq!(err.field_errors().len(), 1);
    }

    #[test]
    fn test_non_field_then_detail_then_message() {
        let strings = Strings::en();
        let err = http(json!({"non_field_errors": ["Bad credentials"], "detail": "x"}));
        assert_eq!(err.user_message(strings, "fallback"), "Bad credentials");

        let err = http(json!({"detail": "Not found.", "message": "y"}));
        assert_eq!(err.user_message(strings, "fallback"), "Not found.");

        let err = http(json!({"message": "Something broke"}));
        assert_eq!(err.user_message(strings, "fallback"), "Something broke");
    }

    #[test]
    fn test_login_error_key_is_a_field_error() {
        let err = http(json!({"error": "Invalid credentials"}));
        assert_eq!(
            err.user_message(Strings::en(), "fallback"),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_generic_fallback() {
        let strings = Strings::en();
        assert_eq!(http(json!({})).user_message(strings, "fallback"), "fallback");
        let err = ApiError::Http {
            status: 500,
            body: ErrorBody::Empty,
        };
        assert_eq!(err.user_message(strings, "fallback"), "fallback");
    }

    #[test]
    fn test_transport_and_unauthorized_messages() {
        let strings = Strings::en();
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(strings, "fallback"), strings.server_unreachable);
        let expired = ApiError::Unauthorized {
            body: ErrorBody::Empty,
        };
        assert_eq!(expired.user_message(strings, "fallback"), strings.session_expired);
        assert_eq!(expired.status(), Some(401));
    }

    #[test]
    fn test_rejected_credentials_message() {
        let err = ApiError::Unauthorized {
            body: ErrorBody::Json(json!({"error": "Invalid credentials"})),
        };
        assert_eq!(
            err.user_message(Strings::en(), "fallback"),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_parse_bodies() {
        assert_eq!(ErrorBody::parse(""), ErrorBody::Empty);
        assert_eq!(
            ErrorBody::parse("<h1>Server Error</h1>"),
            ErrorBody::Text("<h1>Server Error</h1>".to_string())
        );
        assert_eq!(
            ErrorBody::parse(r#""plain""#),
            ErrorBody::Text("plain".to_string())
        );
        assert_eq!(
            ErrorBody::parse(r#"{"detail":"x"}"#).message().as_deref(),
            Some("x")
        );
    }

    #[test]
    fn test_nested_field_messages() {
        let body = ErrorBody::Json(json!({"user": {"email": ["Enter a valid email address."]}}));
        assert_eq!(
            body.field_errors().get("user").map(String::as_str),
            Some("Enter a valid email address.")
        );
    }
}
