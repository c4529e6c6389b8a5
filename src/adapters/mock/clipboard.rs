//! Mock clipboard for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardProvider};

/// Clipboard double that records every successful write.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    copies: Arc<Mutex<Vec<String>>>,
    deny: Arc<Mutex<bool>>,
}

impl MockClipboard {
    /// Create a clipboard that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with [`ClipboardError::Denied`].
    pub fn set_deny(&self, deny: bool) {
        *self.deny.lock().unwrap() = deny;
    }

    /// Everything copied so far, oldest first.
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }

    /// The most recent successful copy.
    pub fn contents(&self) -> Option<String> {
        self.copies.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ClipboardProvider for MockClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.deny.lock().unwrap() {
            return Err(ClipboardError::Denied("Mock clipboard denied".to_string()));
        }
        self.copies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
