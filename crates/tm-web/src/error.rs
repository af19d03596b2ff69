//! API error types for tm-web.
//!
//! Every call to the travel management backend resolves to `Result<T, ApiError>`.
//! Status codes are classified here once so pages only decide how to present them.

use std::time::Duration;

use thiserror::Error;
use tm_types::auth::IdentityError;

/// Failures of a backend call, classified by HTTP status or transport problem.
///
/// Status variants keep the message the backend put in the body, if any, so
/// it can be shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("bad request{}", detail(.message))]
    BadRequest { message: Option<String> },

    /// 401 Unauthorized
    #[error("unauthorized{}", detail(.message))]
    Unauthorized { message: Option<String> },

    /// 403 Forbidden
    #[error("forbidden{}", detail(.message))]
    Forbidden { message: Option<String> },

    /// 404 Not Found
    #[error("not found{}", detail(.message))]
    NotFound { message: Option<String> },

    /// Any other non-success status
    #[error("server returned {status}{}", detail(.message))]
    Server { status: u16, message: Option<String> },

    #[error("request timed out after {}s", .after.as_secs())]
    Timeout { after: Duration },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The login endpoint answered, but not with a usable identity.
    #[error("unexpected login response: {0}")]
    InvalidIdentity(#[from] IdentityError),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

impl ApiError {
    /// Classify a non-success response from its status code and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_error_message(body);
        match status {
            400 => ApiError::BadRequest { message },
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Server { status, message },
        }
    }

    /// Message supplied by the backend, if the response carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest { message }
            | ApiError::Unauthorized { message }
            | ApiError::Forbidden { message }
            | ApiError::NotFound { message }
            | ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show to the user: the backend's own message when present,
    /// otherwise a generic description of the failure.
    pub fn user_message(&self) -> String {
        if let Some(message) = self.backend_message() {
            return message.to_string();
        }

        match self {
            ApiError::BadRequest { .. } => "The request was rejected. Please check your input.".to_string(),
            ApiError::Unauthorized { .. } => "Invalid credentials.".to_string(),
            ApiError::Forbidden { .. } => "You are not allowed to do that.".to_string(),
            ApiError::NotFound { .. } => "The requested item could not be found.".to_string(),
            ApiError::Server { .. } => "The server encountered an error. Please try again later.".to_string(),
            ApiError::Timeout { .. } => "The server took too long to respond. Please try again.".to_string(),
            ApiError::Network(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::InvalidIdentity(_) => "Unexpected login response. Please try again.".to_string(),
        }
    }

    /// Transport failures worth one more attempt on idempotent requests.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Timeout { .. } | ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Pull a human readable message out of an error body.
///
/// The backend answers errors as `{"error": ".."}`, `{"message": ".."}`, a bare
/// JSON string, or plain text depending on the endpoint.
pub fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => ["error", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        Ok(serde_json::Value::String(s)) => Some(s.trim().to_string()).filter(|m| !m.is_empty()),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_shapes() {
        assert_eq!(extract_error_message(r#"{"error":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
        assert_eq!(extract_error_message(r#"{"message":"Username taken"}"#).as_deref(), Some("Username taken"));
        assert_eq!(extract_error_message(r#""Package not found""#).as_deref(), Some("Package not found"));
        assert_eq!(extract_error_message("User already exists").as_deref(), Some("User already exists"));
        assert_eq!(extract_error_message("   "), None);
        assert_eq!(extract_error_message(r#"{"timestamp":"2026-01-01","status":500}"#), None);
    }

    #[test]
    fn test_from_status_classification() {
        assert_eq!(
            ApiError::from_status(401, r#"{"error":"Invalid credentials"}"#),
            ApiError::Unauthorized {
                message: Some("Invalid credentials".to_string())
            }
        );
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound { message: None }));
        assert!(matches!(ApiError::from_status(503, ""), ApiError::Server { status: 503, .. }));
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::from_status(400, "Username already exists");
        assert_eq!(err.user_message(), "Username already exists");

        let err = ApiError::from_status(500, "");
        assert_eq!(err.user_message(), "The server encountered an error. Please try again later.");

        let err = ApiError::from(IdentityError::MissingRole);
        assert_eq!(err.user_message(), "Unexpected login response. Please try again.");
        assert_eq!(err.to_string(), "unexpected login response: login response did not include a role");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(ApiError::Timeout {
            after: Duration::from_secs(15)
        }
        .is_retryable());
        assert!(ApiError::Network("connection reset".to_string()).is_retryable());
        assert!(!ApiError::from_status(500, "").is_retryable());
        assert!(!ApiError::Decode("eof".to_string()).is_retryable());
    }
}
