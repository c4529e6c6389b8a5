//! Clipboard trait abstraction.
//!
//! Clipboard writes may block (X11 round trips) or be refused by the
//! platform, so the trait is async and fallible.

use async_trait::async_trait;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened on this platform/session
    Unavailable(String),
    /// The platform refused the write
    Denied(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::Denied(msg) => write!(f, "Clipboard write denied: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Trait for writing text to the system clipboard.
#[async_trait]
pub trait ClipboardProvider: Send + Sync {
    /// Replace the clipboard contents with `text`.
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        assert_eq!(
            ClipboardError::Unavailable("no display".into()).to_string(),
            "Clipboard unavailable: no display"
        );
        assert_eq!(
            ClipboardError::Denied("policy".into()).to_string(),
            "Clipboard write denied: policy"
        );
    }
}
