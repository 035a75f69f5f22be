//! Host collaborator traits
//!
//! The editor embedding ricetab implements these three seams. All calls are
//! fire-and-forget: the core never learns whether the host acted on them,
//! and none of them may block.

/// Read-only view of the host document
pub trait DocumentView: Send + Sync {
    /// Full buffer text
    fn text(&self) -> String;

    /// Cursor position as a byte offset into [`text`](Self::text)
    fn cursor(&self) -> usize;

    /// Symbol names the host has indexed for this document
    ///
    /// May contain duplicates; the context extractor deduplicates.
    fn symbols(&self) -> Vec<String>;
}

/// Sink for incremental completion text, typically an output panel
pub trait DisplaySink: Send + Sync {
    /// Append a text fragment to the display
    fn append(&self, text: &str);
}

/// Transient "working" feedback, typically a status bar entry
pub trait StatusIndicator: Send + Sync {
    /// Show the given status message
    fn set(&self, message: &str);

    /// Remove the status message
    fn clear(&self);
}

/// Display sink that drops everything
///
/// For hosts that want completions without live streaming output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn append(&self, _text: &str) {}
}

/// Status indicator that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStatus;

impl StatusIndicator for NullStatus {
    fn set(&self, _message: &str) {}
    fn clear(&self) {}
}
