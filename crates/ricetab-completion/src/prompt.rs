//! Chat request assembly
//!
//! Every invocation sends exactly two messages: the configured persona as
//! the system message, and a user message rendering the captured context
//! through a fixed template. The encoding is deterministic: the same
//! context always produces the same request body.
use ricetab_providers::{ChatMessage, ChatRequest};

use crate::{config::CompletionConfig, context::BufferContext};

/// Fixed prefix of every user message
const USER_PROMPT_HEADER: &str =
    "Suggest completions for the following code without explanation:\n";

/// Introduces the symbol list when the host indexed any symbols
const SYMBOLS_HEADER: &str = "\n\nSymbols already defined in this file: ";

/// Render the user message content for a captured context
pub fn user_content(context: &BufferContext) -> String {
    let mut content = String::with_capacity(USER_PROMPT_HEADER.len() + context.snippet.len());
    content.push_str(USER_PROMPT_HEADER);
    content.push_str(&context.snippet);

    if !context.symbols.is_empty() {
        let names: Vec<&str> = context.symbols.iter().map(String::as_str).collect();
        content.push_str(SYMBOLS_HEADER);
        content.push_str(&names.join(", "));
    }

    content
}

/// Build the streaming chat request for a captured context
pub fn build_request(config: &CompletionConfig, context: &BufferContext) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(config.persona.clone()),
            ChatMessage::user(user_content(context)),
        ],
        stream: true,
    }
}
