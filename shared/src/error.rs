use thiserror::Error;

use crate::ErrorDetail;

/// Failure of a single backend request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from any endpoint; the session is no longer valid
    #[error("Session expired or invalid, please log in again")]
    Unauthorized,

    #[error("Server error {status}: {detail}")]
    Server { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify a non-2xx response. The body is usually `{"detail": "..."}`
    /// but falls back to raw text when it is not.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }

        let detail = serde_json::from_str::<ErrorDetail>(body)
            .map(|error| error.detail)
            .unwrap_or_else(|_| {
                let text = body.trim();
                if text.is_empty() {
                    "Unknown error".to_string()
                } else {
                    text.to_string()
                }
            });

        ApiError::Server { status, detail }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message suitable for showing inline in a form
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// Message for the login/register form, where a 401 means bad credentials
    pub fn auth_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Invalid credentials".to_string(),
            ApiError::Server { detail, .. } => detail.clone(),
            other => format!("Authentication failed: {}", other),
        }
    }
}

/// Client-side validation failure for one of the forms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please choose a category")]
    MissingCategory,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Amount must be greater than zero")]
    AmountNotPositive,

    #[error("Please enter your monthly income")]
    InvalidIncome,

    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    #[error("Username and password are required")]
    MissingCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized_regardless_of_body() {
        assert_eq!(ApiError::from_response(401, r#"{"detail": "Token expired"}"#), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert!(ApiError::Unauthorized.is_unauthorized());
    }

    #[test]
    fn test_detail_is_extracted_from_json_body() {
        let error = ApiError::from_response(400, r#"{"detail": "Username already exists"}"#);
        assert_eq!(
            error,
            ApiError::Server {
                status: 400,
                detail: "Username already exists".to_string()
            }
        );
        assert_eq!(error.user_message(), "Username already exists");
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        let error = ApiError::from_response(502, "Bad Gateway\n");
        assert_eq!(error.user_message(), "Bad Gateway");

        let error = ApiError::from_response(500, "");
        assert_eq!(error.user_message(), "Unknown error");
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_auth_messages() {
        assert_eq!(ApiError::Unauthorized.auth_message(), "Invalid credentials");
        assert_eq!(
            ApiError::from_response(400, r#"{"detail": "Username already exists"}"#).auth_message(),
            "Username already exists"
        );
        assert_eq!(
            ApiError::Network("offline".to_string()).auth_message(),
            "Authentication failed: Network error: offline"
        );
    }

    #[test]
    fn test_network_error_message() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.user_message(), "Network error: connection refused");
    }
}
