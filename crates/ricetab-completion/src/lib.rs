//! RiceTab Completion Engine
//!
//! The request/stream/apply pipeline behind inline completions: capture a
//! bounded window of buffer context from the host editor, assemble a
//! two-message chat request, stream the model's answer from a local Ollama
//! server while mirroring fragments to the host display, and reformat the
//! selected completion for insertion at the cursor.
//!
//! # Pipeline
//!
//! 1. **Context capture**: [`BufferContext::capture`] pulls the trailing
//!    lines before the cursor plus the host's symbol index
//! 2. **Request assembly**: [`prompt::build_request`] renders the persona and
//!    context into exactly two role-tagged messages
//! 3. **Streaming**: [`CompletionEngine::request_completion`] spawns one
//!    worker task that drives the chat stream and forwards every fragment to
//!    the [`DisplaySink`] in arrival order
//! 4. **Settlement**: the returned [`InvocationHandle`] settles exactly once,
//!    success or failure; hosts poll it with `try_take` or await `join`
//! 5. **Insertion**: [`apply::select_completion`] reindents the chosen
//!    candidate for the insertion point, honoring the "none selected"
//!    sentinel
//!
//! The host editor stays in charge of all UI: ricetab only reads the
//! document through [`DocumentView`] and talks back through fire-and-forget
//! sinks. Invocations cannot be cancelled and are never retried; a new
//! invocation races any prior one independently.
pub mod apply;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod host;
pub mod invocation;
pub mod prompt;

// Re-export commonly used types
pub use apply::{leading_indent, reindent, select_completion};
pub use config::CompletionConfig;
pub use context::BufferContext;
pub use engine::CompletionEngine;
pub use error::CompletionError;
pub use host::{DisplaySink, DocumentView, NullDisplay, NullStatus, StatusIndicator};
pub use invocation::{InvocationHandle, InvocationOutcome};
