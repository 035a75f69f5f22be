//! Invocation lifecycle: the worker body and the settlement handle
//!
//! Each completion request is one invocation: a spawned worker drives the
//! chat stream to the end while the caller holds an [`InvocationHandle`].
//! The handle settles exactly once, with the accumulated completion or the
//! error that aborted it, and never blocks the caller: hosts either poll
//! [`InvocationHandle::try_take`] from a timer or await
//! [`InvocationHandle::join`] from an async context. Invocations cannot be
//! cancelled; a new invocation races any prior one independently, each with
//! its own handle.

use std::sync::Arc;

use futures::StreamExt;
use ricetab_providers::{ChatProvider, ChatRequest, Completion};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::{
    error::CompletionError,
    host::{DisplaySink, StatusIndicator},
};

/// How a settled invocation ended: the full completion, or the error that
/// aborted it
pub type InvocationOutcome = Result<Completion, CompletionError>;

/// Caller-side handle to one in-flight invocation
///
/// Settles exactly once. The first observation of the outcome, through
/// either accessor, clears the host's "working" status indicator; the
/// outcome can only be retrieved once.
pub struct InvocationHandle {
    receiver: Option<oneshot::Receiver<InvocationOutcome>>,
    status: Arc<dyn StatusIndicator>,
}

impl InvocationHandle {
    pub(crate) fn new(
        receiver: oneshot::Receiver<InvocationOutcome>,
        status: Arc<dyn StatusIndicator>,
    ) -> Self {
        Self {
            receiver: Some(receiver),
            status,
        }
    }

    /// Non-blocking readiness check
    ///
    /// Returns `None` while the worker is still streaming; once the
    /// invocation settles, returns the outcome and clears the status
    /// indicator. Later calls return `None` again: the outcome is handed
    /// out exactly once.
    pub fn try_take(&mut self) -> Option<InvocationOutcome> {
        let receiver = self.receiver.as_mut()?;

        match receiver.try_recv() {
            Ok(outcome) => {
                self.receiver = None;
                self.status.clear();
                Some(outcome)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                // Worker went away without sending; still settle so the
                // caller's polling loop terminates
                self.receiver = None;
                self.status.clear();
                warn!("Completion worker dropped its handle without settling");
                Some(Err(CompletionError::TaskFailed))
            }
        }
    }

    /// Await the outcome
    ///
    /// Consumes the handle; clears the status indicator once the invocation
    /// settles. If `try_take` already retrieved the outcome, fails with
    /// [`CompletionError::TaskFailed`].
    pub async fn join(mut self) -> InvocationOutcome {
        let Some(receiver) = self.receiver.take() else {
            return Err(CompletionError::TaskFailed);
        };

        let outcome = match receiver.await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("Completion worker dropped its handle without settling");
                Err(CompletionError::TaskFailed)
            }
        };
        self.status.clear();
        outcome
    }
}

/// Worker body: drive the chat stream to the end
///
/// Forwards every text fragment to the display sink in arrival order while
/// accumulating the full response. The first stream error aborts the
/// invocation and discards the partial accumulator; a stream that ends
/// without any content settles as [`CompletionError::EmptyCompletion`].
pub(crate) async fn drive_stream(
    provider: Arc<dyn ChatProvider>,
    request: ChatRequest,
    display: Arc<dyn DisplaySink>,
) -> InvocationOutcome {
    let mut stream = provider.chat_stream(request).await?;
    let mut accumulated = String::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if let Some(fragment) = chunk.content {
            display.append(&fragment);
            accumulated.push_str(&fragment);
        }
        if chunk.done {
            break;
        }
    }

    if accumulated.is_empty() {
        return Err(CompletionError::EmptyCompletion);
    }

    debug!(chars = accumulated.len(), "Completion stream finished");
    Ok(Completion { text: accumulated })
}
