//! Data models for the chat wire protocol

use serde::{Deserialize, Serialize};

/// Message author role recognized by the chat endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed persona instructions, sent once ahead of user content
    System,
    /// Caller-supplied content
    User,
}

/// A chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Build a persona (system) message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Build a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat completion request, serialized verbatim as the `/api/chat` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Model identifier; a configuration value, never derived from content
    pub model: String,
    /// Ordered messages; ricetab always sends a [system, user] pair
    pub messages: Vec<ChatMessage>,
    /// Whether the endpoint should answer with newline-delimited records
    pub stream: bool,
}

/// One decoded record from a streaming chat response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatChunk {
    /// Text fragment carried by this record, if any
    pub content: Option<String>,
    /// Whether this is the terminal record of the stream
    pub done: bool,
}

/// A fully accumulated completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The complete response text
    pub text: String,
}

/// One locally installed model as reported by the tags endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model name, e.g. `codellama:latest`
    pub name: String,
}
