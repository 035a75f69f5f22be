//! Error types for the completion crate

use ricetab_providers::ProviderError;
use thiserror::Error;

/// Errors that can settle a completion invocation
#[derive(Debug, Error, PartialEq, Clone)]
pub enum CompletionError {
    /// Transport or protocol failure reported by the provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The stream ended without accumulating any content
    #[error("Model returned an empty completion")]
    EmptyCompletion,

    /// The worker task went away without settling its handle
    #[error("Completion task failed before settling")]
    TaskFailed,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
