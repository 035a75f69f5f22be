//! Chat provider trait

use async_trait::async_trait;
use futures;

use crate::{
    error::ProviderError,
    models::{ChatChunk, ChatRequest, ModelInfo},
};

/// A stream of decoded chat records
pub type ChatStream = futures::stream::BoxStream<'static, Result<ChatChunk, ProviderError>>;

/// Core trait an inference backend must implement
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Start a streaming chat completion
    ///
    /// Records are yielded one per wire line, in arrival order. The first
    /// error ends the stream; there is no automatic retry.
    async fn chat_stream(&self, request: ChatRequest) -> Result<ChatStream, ProviderError>;

    /// List the models installed on the backend
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Check if the backend is reachable and healthy
    async fn health_check(&self) -> Result<bool, ProviderError>;
}
