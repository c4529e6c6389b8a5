//! System clipboard adapter backed by arboard.
//!
//! A fresh `arboard::Clipboard` is opened per write on the blocking pool;
//! holding one open across the session pins an X11 connection.

use arboard::Clipboard;
use async_trait::async_trait;

use crate::traits::{ClipboardError, ClipboardProvider};

/// Clipboard implementation using the OS clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a new system clipboard adapter.
    pub fn new() -> Self {
        Self
    }

    fn write(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Denied(e.to_string()))
    }
}

#[async_trait]
impl ClipboardProvider for SystemClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || Self::write(&text))
            .await
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
    }
}
