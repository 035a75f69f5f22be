//! Buffer context capture
//!
//! Pulls what the model needs to continue the code at the cursor: the
//! trailing window of text before the cursor, and the distinct symbol names
//! the host has indexed for the document. No network or UI side effects.
use std::collections::BTreeSet;

use tracing::debug;

use crate::host::DocumentView;

/// Context captured from the host document at invocation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferContext {
    /// Trailing lines of text up to the cursor
    pub snippet: String,
    /// Distinct symbol names known for the document
    ///
    /// Ordered so downstream prompt encoding is deterministic.
    pub symbols: BTreeSet<String>,
}

impl BufferContext {
    /// Capture a bounded context from the host document
    pub fn capture(view: &dyn DocumentView, max_lines: usize) -> Self {
        let text = view.text();
        let snippet = trailing_window(&text, view.cursor(), max_lines).to_string();
        let symbols: BTreeSet<String> = view.symbols().into_iter().collect();

        debug!(
            snippet_len = snippet.len(),
            symbols = symbols.len(),
            "Captured buffer context"
        );

        BufferContext { snippet, symbols }
    }
}

/// The last `max_lines` lines of `text` before `cursor`
///
/// The cursor's own line participates as its prefix up to the cursor. A
/// cursor past the end of the text clamps to the end; a cursor inside a
/// multi-byte character clamps back to the previous character boundary.
pub fn trailing_window(text: &str, cursor: usize, max_lines: usize) -> &str {
    if max_lines == 0 {
        return "";
    }

    let mut end = cursor.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    let prefix = &text[..end];

    let mut start = 0;
    let mut newlines = 0;
    for (i, byte) in prefix.bytes().enumerate().rev() {
        if byte == b'\n' {
            newlines += 1;
            if newlines == max_lines {
                start = i + 1;
                break;
            }
        }
    }

    &prefix[start..]
}
