//! Error types for API calls and draft validation.

use thiserror::Error;

/// Everything that can go wrong between a panel and the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline...).
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but was not a readable envelope.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The envelope said `success: false`. Carries the server's `error` text when present.
    #[error("{}", .0.as_deref().unwrap_or("Request rejected"))]
    Rejected(Option<String>),

    /// HTTP 401 from the backend.
    #[error("{0}")]
    Unauthorized(String),

    /// A write was attempted without a session token; nothing was sent.
    #[error("Please log in to make changes.")]
    NotAuthenticated,
}

impl ApiError {
    /// The session is missing or was refused by the backend.
    pub fn needs_sign_in(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::NotAuthenticated)
    }

    /// Text shown to the operator: the server's own words when it gave any,
    /// `network` when no response arrived, otherwise `fallback`.
    pub fn describe(&self, fallback: &str, network: &str) -> String {
        match self {
            ApiError::Rejected(Some(msg)) | ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::Rejected(None) | ApiError::Decode(_) => fallback.to_string(),
            ApiError::Transport(_) => network.to_string(),
            ApiError::NotAuthenticated => self.to_string(),
        }
    }
}

/// A draft field that cannot be sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_prefers_server_text() {
        let err = ApiError::Rejected(Some("Title already used".to_string()));
        assert_eq!(err.describe("Failed", "Offline"), "Title already used");

        let err = ApiError::Unauthorized("Unauthorized".to_string());
        assert_eq!(err.describe("Failed", "Offline"), "Unauthorized");
    }

    #[test]
    fn test_describe_fallbacks() {
        assert_eq!(ApiError::Rejected(None).describe("Failed", "Offline"), "Failed");
        assert_eq!(
            ApiError::Transport("dns".to_string()).describe("Failed", "Offline"),
            "Offline"
        );
        assert_eq!(
            ApiError::Decode("eof".to_string()).describe("Failed", "Offline"),
            "Failed"
        );
        assert_eq!(
            ApiError::NotAuthenticated.describe("Failed", "Offline"),
            "Please log in to make changes."
        );
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required("Title").to_string(), "Title is required");
        assert_eq!(
            FieldError::NotANumber("Order").to_string(),
            "Order must be a whole number"
        );
    }
}
