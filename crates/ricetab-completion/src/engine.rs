//! Completion engine
//!
//! Front door of the pipeline: captures context from the host document,
//! builds the chat request, and hands the streaming work to a background
//! worker so the calling thread (conceptually the editor's UI thread) never
//! blocks. Each call to [`CompletionEngine::request_completion`] is one
//! independent invocation with its own [`InvocationHandle`].
use std::sync::Arc;

use ricetab_providers::ChatProvider;
use tokio::sync::oneshot;
use tracing::debug;

use crate::{
    config::CompletionConfig,
    context::BufferContext,
    error::CompletionError,
    host::{DisplaySink, DocumentView, StatusIndicator},
    invocation::{drive_stream, InvocationHandle},
    prompt,
};

/// Status message shown while an invocation is in flight
pub const WORKING_STATUS: &str = "ricetab: waiting for completion";

/// Orchestrates completion invocations against a chat provider
pub struct CompletionEngine {
    provider: Arc<dyn ChatProvider>,
    config: CompletionConfig,
}

impl CompletionEngine {
    /// Create an engine over a provider
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        config: CompletionConfig,
    ) -> Result<Self, CompletionError> {
        config.validate()?;

        Ok(Self { provider, config })
    }

    /// The configuration this engine was built with
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Start a completion invocation for the current document state
    ///
    /// Captures the context and returns immediately; the network work runs
    /// on a spawned worker task that streams fragments to `display` as they
    /// arrive. The "working" status is set here and cleared when the
    /// returned handle observes settlement. The handle always settles, on
    /// success and on failure alike; there is no cancellation and no retry.
    ///
    /// Must be called within a Tokio runtime.
    pub fn request_completion(
        &self,
        view: &dyn DocumentView,
        display: Arc<dyn DisplaySink>,
        status: Arc<dyn StatusIndicator>,
    ) -> InvocationHandle {
        let context = BufferContext::capture(view, self.config.context_lines);
        let request = prompt::build_request(&self.config, &context);

        debug!(
            model = %request.model,
            snippet_len = context.snippet.len(),
            "Starting completion invocation"
        );
        status.set(WORKING_STATUS);

        let (sender, receiver) = oneshot::channel();
        let provider = Arc::clone(&self.provider);

        tokio::spawn(async move {
            let outcome = drive_stream(provider, request, display).await;
            // The caller may have dropped the handle; nothing to do then
            let _ = sender.send(outcome);
        });

        InvocationHandle::new(receiver, status)
    }
}
