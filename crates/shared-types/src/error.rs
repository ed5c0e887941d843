use serde::{Deserialize, Serialize};
use std::fmt;

/// Message used when a failed response carries no usable `message` field.
pub const REQUEST_FAILED_FALLBACK: &str = "API request failed";

/// Error produced by every call that goes through the API transport.
///
/// Network failures, authentication failures and validation failures on the
/// backend all collapse into `RequestFailed`. The HTTP status is kept when a
/// response was received so logs can tell them apart, but callers only ever
/// show `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    RequestFailed {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
    },
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            message: message.into(),
            status: None,
        }
    }

    /// Build the error for a non-success response.
    ///
    /// Takes the `message` string from the parsed body when it is present and
    /// non-empty, otherwise falls back to [`REQUEST_FAILED_FALLBACK`].
    pub fn from_response(status: u16, body: Option<&serde_json::Value>) -> Self {
        let message = body
            .and_then(|b| b.get("message"))
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(REQUEST_FAILED_FALLBACK);
        ApiError::RequestFailed {
            message: message.to_string(),
            status: Some(status),
        }
    }

    /// The request never produced a response (connection refused, DNS, CORS...).
    pub fn network(err: impl fmt::Display) -> Self {
        Self::request_failed(format!("Network error: {err}"))
    }

    /// A success response whose body did not match the expected shape.
    pub fn malformed(err: impl fmt::Display) -> Self {
        Self::request_failed(format!("Malformed response from server: {err}"))
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}
