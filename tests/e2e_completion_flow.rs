//! End-to-end pipeline tests
//!
//! Exercises the full request/stream/apply flow against a mock Ollama
//! server: capture buffer context, build the chat request, stream the
//! completion into a display sink, settle the invocation handle, and
//! reindent the chosen completion for insertion.

use std::sync::{Arc, Mutex};

use ricetab_completion::{
    apply, CompletionConfig, CompletionEngine, CompletionError, DisplaySink, DocumentView,
    StatusIndicator,
};
use ricetab_providers::{OllamaClient, ProviderError};

struct EditorDocument {
    text: String,
    symbols: Vec<String>,
}

impl DocumentView for EditorDocument {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn cursor(&self) -> usize {
        self.text.len()
    }

    fn symbols(&self) -> Vec<String> {
        self.symbols.clone()
    }
}

#[derive(Default)]
struct PanelDisplay {
    fragments: Mutex<Vec<String>>,
}

impl DisplaySink for PanelDisplay {
    fn append(&self, text: &str) {
        self.fragments.lock().unwrap().push(text.to_string());
    }
}

#[derive(Default)]
struct StatusBar {
    current: Mutex<Option<String>>,
}

impl StatusIndicator for StatusBar {
    fn set(&self, message: &str) {
        *self.current.lock().unwrap() = Some(message.to_string());
    }

    fn clear(&self) {
        *self.current.lock().unwrap() = None;
    }
}

fn engine_for(base_url: String) -> (CompletionEngine, Arc<PanelDisplay>, Arc<StatusBar>) {
    let display = Arc::new(PanelDisplay::default());
    let status = Arc::new(StatusBar::default());
    let config = CompletionConfig {
        base_url: base_url.clone(),
        ..CompletionConfig::default()
    };
    let engine =
        CompletionEngine::new(Arc::new(OllamaClient::new(base_url).unwrap()), config).unwrap();
    (engine, display, status)
}

/// Test: The full pipeline from buffer capture to insertion text
/// A snippet plus symbols goes out as one two-message streaming request;
/// the streamed answer is mirrored to the display, settles as one
/// completion, and reindents for the insertion point
#[tokio::test]
async fn test_capture_stream_settle_and_apply() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/chat")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "codellama",
            "stream": true,
        })))
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body(
            r#"{"message":{"role":"assistant","content":" a + b"},"done":false}
{"message":{"role":"assistant","content":"\nprint(add(1, 2))"},"done":false}
{"done":true}
"#,
        )
        .create_async()
        .await;

    let (engine, display, status) = engine_for(server.url());
    let document = EditorDocument {
        text: "def add(a, b):\n    return".to_string(),
        symbols: vec!["add".to_string()],
    };

    let handle = engine.request_completion(&document, display.clone(), status.clone());
    assert!(status.current.lock().unwrap().is_some());

    let completion = handle.join().await.unwrap();
    mock.assert_async().await;

    assert_eq!(completion.text, " a + b\nprint(add(1, 2))");
    assert_eq!(
        display.fragments.lock().unwrap().concat(),
        completion.text
    );
    assert!(status.current.lock().unwrap().is_none());

    // The chosen completion lands reindented to the cursor's line
    let indent = apply::leading_indent(&document.text, document.cursor());
    let inserted =
        apply::select_completion(&[completion.text], Some(0), indent).unwrap();
    assert_eq!(inserted, " a + b\n    print(add(1, 2))");
}

/// Test: A malformed record mid-stream aborts the invocation
/// The handle still settles, the status clears, and no partial completion
/// is offered
#[tokio::test]
async fn test_mid_stream_abort_settles_with_error() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body(
            "{\"message\":{\"content\":\"good\"},\"done\":false}\nnot json at all\n",
        )
        .create_async()
        .await;

    let (engine, display, status) = engine_for(server.url());
    let document = EditorDocument {
        text: "let x = ".to_string(),
        symbols: Vec::new(),
    };

    let outcome = engine.request_completion(&document, display.clone(), status.clone()).join().await;

    assert!(matches!(
        outcome,
        Err(CompletionError::Provider(ProviderError::ParseError(_)))
    ));
    assert!(status.current.lock().unwrap().is_none());
}

/// Test: An unreachable server settles the invocation with a network error
#[tokio::test]
async fn test_unreachable_server_settles_with_network_error() {
    // Nothing listens on this port
    let (engine, display, status) = engine_for("http://127.0.0.1:59999".to_string());
    let document = EditorDocument {
        text: "fn main() {".to_string(),
        symbols: Vec::new(),
    };

    let outcome = engine.request_completion(&document, display.clone(), status.clone()).join().await;

    assert!(matches!(
        outcome,
        Err(CompletionError::Provider(ProviderError::NetworkError(_)))
    ));
    assert!(display.fragments.lock().unwrap().is_empty());
    assert!(status.current.lock().unwrap().is_none());
}

/// Test: The engine rejects an invalid configuration up front
#[tokio::test]
async fn test_invalid_config_is_rejected_at_construction() {
    let config = CompletionConfig {
        model: String::new(),
        ..CompletionConfig::default()
    };
    let result =
        CompletionEngine::new(Arc::new(OllamaClient::new("http://localhost:11434").unwrap()), config);

    assert!(matches!(result, Err(CompletionError::ConfigError(_))));
}
