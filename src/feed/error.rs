//! Error handling for the feed module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the JSON body returned by the server.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    pub async fn from_response(response: reqwest::Response) -> FeedError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FeedError::Http { status, message }
    }

    /// Classify the error into the log level its event is recorded at.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Rate limiting - low priority
            FeedError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            FeedError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Authentication errors - critical
            FeedError::Http { status, .. } if *status == 401 || *status == 403 => LogLevel::Error,

            // Network issues - usually temporary
            FeedError::Transport(_) => LogLevel::Warn,

            // Malformed bodies point at a contract mismatch
            FeedError::Decode(_) => LogLevel::Error,

            _ => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_classify_as_warnings() {
        let err = FeedError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn auth_errors_classify_as_errors() {
        for status in [401, 403] {
            let err = FeedError::Http {
                status,
                message: String::new(),
            };
            assert_eq!(err.log_level(), LogLevel::Error);
        }
    }

    #[test]
    fn rate_limiting_stays_quiet() {
        let err = FeedError::Http {
            status: 429,
            message: String::new(),
        };
        assert_eq!(err.log_level(), LogLevel::Debug);
    }
}
