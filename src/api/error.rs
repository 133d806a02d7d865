//! Error taxonomy for the portfolio API gateway

/// Errors surfaced by the API gateway client
///
/// Every failure is terminal per call: there is no retry policy, the caller
/// decides whether to surface the message or re-trigger the action.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body flags the operation as unsuccessful
    #[error("server rejected the request: {0}")]
    Rejected(String),

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Non-2xx status code, when the failure came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 404,
            message: "Portfolio item not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Portfolio item not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_validation_error_is_plain_message() {
        let err = ApiError::Validation("Missing required field: coin_id".to_string());
        assert_eq!(err.to_string(), "Missing required field: coin_id");
        assert_eq!(err.status(), None);
    }
}
