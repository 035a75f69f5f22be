//! Error types for the providers crate

use thiserror::Error;

/// Errors that can occur when talking to an inference backend
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProviderError {
    /// Network error occurred (connection refused, timeout, DNS failure,
    /// or a transport failure mid-stream)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The endpoint answered with a non-success HTTP status
    #[error("API error: {0}")]
    ApiError(String),

    /// A response record was not valid JSON or lacked the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::ParseError(err.to_string())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}
