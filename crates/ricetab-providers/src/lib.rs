//! Ricetab Providers - chat transport for local Ollama inference
//!
//! This crate owns the wire side of ricetab: the chat request/response data
//! model, the streaming NDJSON client for a locally running Ollama server,
//! and the provider trait the completion engine consumes.

pub mod error;
pub mod models;
pub mod ollama;
pub mod provider;

// Re-export commonly used types
pub use error::ProviderError;
pub use models::{ChatChunk, ChatMessage, ChatRequest, Completion, ModelInfo, Role};
pub use ollama::{OllamaClient, DEFAULT_BASE_URL};
pub use provider::{ChatProvider, ChatStream};
