use thiserror::Error;

use crate::types::ApiError;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Why a backend call did not produce the expected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The backend answered successfully but the body had an unexpected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Builds a status error from a response body, using the backend's
    /// `{"error": ...}` text when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiError>(body)
            .map(|e| e.error)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        FetchError::Status { status, message }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            FetchError::Status { status: 404, message } => format!("Not found: {}", message),
            FetchError::Status { message, .. } => message.clone(),
            FetchError::Malformed(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_backend_error() {
        let err = FetchError::from_status(404, r#"{"error": "Recipe not found"}"#);
        assert_eq!(
            err,
            FetchError::Status {
                status: 404,
                message: "Recipe not found".to_string()
            }
        );
        assert_eq!(err.user_message(), "Not found: Recipe not found");
    }

    #[test]
    fn test_from_status_with_unreadable_body() {
        let err = FetchError::from_status(500, "<html>gateway</html>");
        assert_eq!(err.user_message(), UNKNOWN_ERROR);

        let empty = FetchError::from_status(500, r#"{"error": ""}"#);
        assert_eq!(empty.user_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_user_messages_hide_details() {
        let network = FetchError::Network("TypeError: Failed to fetch".to_string());
        assert!(!network.user_message().contains("TypeError"));

        let malformed = FetchError::Malformed("missing field `id`".to_string());
        assert!(!malformed.user_message().contains("missing field"));
        assert!(malformed.to_string().contains("missing field"));
    }
}
