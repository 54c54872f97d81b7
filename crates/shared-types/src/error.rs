use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Form input rejected before any request was sent.
    Validation,
    /// The request could not be sent or the response could not be received.
    Network,
    /// The API answered with a non-2xx status.
    Http,
    /// Login was rejected or could not be completed.
    Auth,
    /// A 2xx response whose body did not have the expected shape.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Validation => write!(f, "ValidationError"),
            AppErrorKind::Network => write!(f, "NetworkError"),
            AppErrorKind::Http => write!(f, "HttpError"),
            AppErrorKind::Auth => write!(f, "AuthError"),
            AppErrorKind::Decode => write!(f, "DecodeError"),
        }
    }
}

/// Structured error shared by the API client, the slices and the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
    /// HTTP status of the failed response, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Message used when neither the server nor the caller provides one.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
            field_errors,
            status: None,
        }
    }

    /// Validation failure on a single field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
            field_errors: HashMap::new(),
            status: None,
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Http,
            message: message.into(),
            field_errors: HashMap::new(),
            status: Some(status),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Auth,
            message: message.into(),
            field_errors: HashMap::new(),
            status: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Decode,
            message: message.into(),
            field_errors: HashMap::new(),
            status: None,
        }
    }

    /// Build an `Http` error from a non-2xx response body.
    ///
    /// The API reports failures as `{"message": "..."}`. When the body is
    /// not JSON, or carries no non-empty `message`, `fallback` is used.
    pub fn from_response_body(status: u16, body: &str, fallback: &str) -> Self {
        Self::http(status, Self::server_message(body).unwrap_or_else(|| fallback.to_string()))
    }

    /// Extract the `message` field of an error body, if any.
    pub fn server_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
    }

    /// Turn any error into the login-specific subtype, keeping its message.
    pub fn into_auth(self) -> Self {
        Self {
            kind: AppErrorKind::Auth,
            ..self
        }
    }

    /// True for a 401 answer, which means the session token is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AppErrorKind::Validation
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        // A single failing field doubles as the headline message.
        let message = if field_errors.len() == 1 {
            field_errors.values().next().cloned().unwrap_or_default()
        } else {
            "Validation failed".to_string()
        };
        AppError::validation(message, field_errors)
    }
}
