//! Error types for the Assessment Finder SDK.

use thiserror::Error;

/// SDK operation errors
///
/// Each variant maps to one user-facing message; the display text is meant
/// to be shown verbatim.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The service answered with a non-success status
    #[error("API Error {status}: {detail}")]
    Api {
        /// HTTP status code
        status: u16,
        /// `detail` from the error body, or the status reason phrase
        detail: String,
    },

    /// Nothing came back (refused connection, DNS failure, timeout)
    #[error("No response from server. Please check if the API is running.")]
    NoResponse(String),

    /// The request could not be built (bad URL, empty query)
    #[error("Request failed: {0}")]
    Request(String),

    /// The service answered 2xx with a body we cannot read
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SdkError {
    /// Underlying cause, for logs
    pub fn cause(&self) -> &str {
        match self {
            SdkError::Api { detail, .. } => detail,
            SdkError::NoResponse(cause)
            | SdkError::Request(cause)
            | SdkError::InvalidResponse(cause) => cause,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            SdkError::Request(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => SdkError::Api {
                    status: status.as_u16(),
                    detail: status
                        .canonical_reason()
                        .unwrap_or("Unknown status")
                        .to_string(),
                },
                None => SdkError::NoResponse(e.to_string()),
            }
        } else if e.is_decode() {
            SdkError::InvalidResponse(e.to_string())
        } else {
            SdkError::NoResponse(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SdkError::Api {
            status: 500,
            detail: "Index not loaded".to_string(),
        };
        assert_eq!(err.to_string(), "API Error 500: Index not loaded");

        let err = SdkError::NoResponse("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "No response from server. Please check if the API is running."
        );
        assert_eq!(err.cause(), "connection refused");

        let err = SdkError::Request("relative URL without a base".to_string());
        assert_eq!(err.to_string(), "Request failed: relative URL without a base");
    }
}
