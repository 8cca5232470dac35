//! Errors returned by hospital service adapters.

use thiserror::Error;

/// Errors that can occur when talking to the hospital service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        /// `message` field of the error body, if the server sent one.
        message: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl ServiceError {
    /// Server-provided message, used verbatim in operator notices.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Server-provided message or the given fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_rejections() {
        let err = ServiceError::Rejected {
            status: 409,
            message: Some("in use".to_string()),
        };
        assert_eq!(err.server_message(), Some("in use"));
        assert_eq!(err.message_or("Failed to delete doctor"), "in use");

        let err = ServiceError::Connection("Cannot connect".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.message_or("Failed to delete doctor"), "Failed to delete doctor");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let err = ServiceError::Rejected {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.message_or("Failed to add doctor"), "Failed to add doctor");
        assert_eq!(
            err.to_string(),
            "Request rejected with status 500: "
        );
    }
}
