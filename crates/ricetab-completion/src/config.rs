//! Completion engine configuration
//!
//! A plain record passed at construction. Ricetab never reads configuration
//! files or environment variables; the host owns that layer and hands the
//! resolved values in.
use std::time::Duration;

use ricetab_providers::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// Instructions sent as the system message ahead of every request
pub const DEFAULT_PERSONA: &str = "You are a code completion assistant. \
Continue the code you are given exactly from where it stops. \
Respond with code only, without explanations or formatting fences.";

/// Configuration for the completion engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// System message establishing the model's behavior
    pub persona: String,
    /// How many trailing lines of the buffer are sent as context
    pub context_lines: usize,
    /// Recommended cadence for hosts polling an invocation handle from a timer
    pub poll_interval_ms: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "codellama".to_string(),
            persona: DEFAULT_PERSONA.to_string(),
            context_lines: 16,
            poll_interval_ms: 100,
        }
    }
}

impl CompletionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CompletionError> {
        if self.base_url.is_empty() {
            return Err(CompletionError::ConfigError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        if self.model.is_empty() {
            return Err(CompletionError::ConfigError(
                "Model name cannot be empty".to_string(),
            ));
        }

        if self.context_lines == 0 {
            return Err(CompletionError::ConfigError(
                "Context window must cover at least one line".to_string(),
            ));
        }

        Ok(())
    }

    /// Polling cadence as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
