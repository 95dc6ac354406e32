//! Centralized error handling and classification

use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Centralized error handler for all network operations
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Client errors - a stable backend answer, not transient
            ApiError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Info,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // Malformed responses are a contract violation
            ApiError::Decode(_) => LogLevel::Error,

            _ => LogLevel::Warn,
        }
    }

    /// Determine if an error should trigger retry logic
    pub fn should_retry(&self, error: &ApiError) -> bool {
        match error {
            // Retry on network/connection errors
            ApiError::Reqwest(_) => true,
            ApiError::Decode(_) => true,

            // HTTP errors - check status code
            ApiError::Http { status, .. } => {
                match *status {
                    // Timeouts and rate limiting may clear after a backoff
                    408 | 429 => true,
                    // Other client errors won't change on retry: a 404 is
                    // "no content for this date", a 400 is a bad request
                    400..=499 => false,
                    // Retry server errors
                    500..=599 => true,
                    // Don't retry other status codes
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_server_errors_retry() {
        let handler = ErrorHandler::new();
        assert!(handler.should_retry(&http(500)));
        assert!(handler.should_retry(&http(503)));
    }

    #[test]
    fn test_client_errors_do_not_retry() {
        let handler = ErrorHandler::new();
        assert!(!handler.should_retry(&http(400)));
        assert!(!handler.should_retry(&http(404)));
    }

    #[test]
    fn test_timeout_and_rate_limit_retry() {
        let handler = ErrorHandler::new();
        assert!(handler.should_retry(&http(408)));
        assert!(handler.should_retry(&http(429)));
    }

    #[test]
    fn test_decode_errors_retry_and_log_loud() {
        let handler = ErrorHandler::new();
        let err = ApiError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(handler.should_retry(&err));
        assert_eq!(handler.classify_error(&err), LogLevel::Error);
    }

    #[test]
    fn test_classification_levels() {
        let handler = ErrorHandler::new();
        assert_eq!(handler.classify_error(&http(429)), LogLevel::Debug);
        assert_eq!(handler.classify_error(&http(500)), LogLevel::Warn);
        assert_eq!(handler.classify_error(&http(404)), LogLevel::Info);
    }
}
