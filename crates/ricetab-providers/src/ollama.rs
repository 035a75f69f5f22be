//! Ollama client implementation
//!
//! Talks to a locally running Ollama server. Chat responses are consumed
//! incrementally: the HTTP body is read as it arrives and every complete
//! newline-delimited JSON record is decoded and yielded immediately, so
//! callers see fragments while the model is still generating.

use std::sync::Arc;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::{
    error::ProviderError,
    models::{ChatChunk, ChatRequest, ModelInfo},
    provider::{ChatProvider, ChatStream},
};

/// Endpoint of a default local Ollama install
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Client for the Ollama HTTP API
pub struct OllamaClient {
    client: Arc<Client>,
    base_url: String,
}

impl OllamaClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ProviderError::ConfigError(
                "Ollama base URL is required".to_string(),
            ));
        }

        Ok(Self {
            client: Arc::new(Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against the default localhost endpoint
    pub fn with_default_endpoint() -> Result<Self, ProviderError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the chat request and verify the response status
    async fn send_chat(&self, request: &ChatRequest) -> Result<reqwest::Response, ProviderError> {
        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama chat request failed: {}", e);
                ProviderError::NetworkError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError(format!(
                "Ollama API error: {}",
                status
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatProvider for OllamaClient {
    async fn chat_stream(&self, request: ChatRequest) -> Result<ChatStream, ProviderError> {
        debug!(
            "Starting streaming chat request to Ollama for model: {}",
            request.model
        );

        let response = self.send_chat(&request).await?;

        let stream = try_stream! {
            let mut body = response.bytes_stream();
            // Byte buffer: a network chunk may end mid-character, so only
            // complete lines are decoded as UTF-8
            let mut buffer: Vec<u8> = Vec::new();
            let mut finished = false;

            while let Some(chunk) = body.next().await {
                let chunk = chunk.map_err(|e| {
                    error!("Ollama chat stream interrupted: {}", e);
                    ProviderError::NetworkError(e.to_string())
                })?;
                buffer.extend_from_slice(&chunk);

                // Emit every complete line; a record never spans lines
                while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=line_end).collect();
                    let line = decode_line(&line)?;
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let record = parse_chat_line(line)?;
                    finished = record.done;
                    yield record;
                    if finished {
                        break;
                    }
                }
                if finished {
                    break;
                }
            }

            // Bytes left after EOF are a final, unterminated line
            if !finished {
                let tail = decode_line(&buffer)?.trim().to_string();
                if !tail.is_empty() {
                    yield parse_chat_line(&tail)?;
                }
            }
        };

        Ok(stream.boxed())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        debug!("Fetching installed models from Ollama");

        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Failed to fetch models from Ollama: {}", e);
            ProviderError::NetworkError(e.to_string())
        })?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Ollama API error: {}",
                response.status()
            )));
        }

        let tags: OllamaTagsResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ollama tags response: {}", e);
            ProviderError::ParseError(format!("failed to parse tags response: {}", e))
        })?;

        let models: Vec<ModelInfo> = tags
            .models
            .unwrap_or_default()
            .into_iter()
            .map(|model| ModelInfo { name: model.name })
            .collect();

        debug!("Ollama reports {} installed models", models.len());
        Ok(models)
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        debug!("Performing health check against {}", self.base_url);

        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Ollama health check passed");
                Ok(true)
            }
            Ok(response) => {
                warn!(
                    "Ollama health check failed with status: {}",
                    response.status()
                );
                Ok(false)
            }
            Err(e) => {
                warn!("Ollama is not reachable at {}: {}", self.base_url, e);
                Ok(false)
            }
        }
    }
}

/// Decode one buffered wire line as UTF-8
fn decode_line(bytes: &[u8]) -> Result<&str, ProviderError> {
    std::str::from_utf8(bytes).map_err(|e| {
        warn!("Chat stream line is not valid UTF-8: {}", e);
        ProviderError::ParseError(format!("invalid utf-8 in stream: {}", e))
    })
}

/// Decode one wire line into a chunk
fn parse_chat_line(line: &str) -> Result<ChatChunk, ProviderError> {
    let record: OllamaChatRecord = serde_json::from_str(line).map_err(|e| {
        warn!("Malformed record in chat stream: {}", e);
        ProviderError::ParseError(format!("malformed stream record: {}", e))
    })?;

    Ok(ChatChunk {
        content: record.message.and_then(|m| m.content),
        done: record.done,
    })
}

/// Ollama API streaming chat record format
#[derive(Debug, Deserialize)]
struct OllamaChatRecord {
    message: Option<OllamaRecordMessage>,
    done: bool,
}

/// Ollama API response message format
#[derive(Debug, Deserialize)]
struct OllamaRecordMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Ollama API tags response format
#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    models: Option<Vec<OllamaModel>>,
}

/// Ollama model information
#[derive(Debug, Deserialize, Clone)]
struct OllamaModel {
    name: String,
}
