//! Result presenter: turns the generation state into something to render,
//! and copies generated text to the clipboard.

use std::sync::Arc;

use super::generation::GenerationState;
use crate::error::WorkflowResult;
use crate::traits::ClipboardProvider;

/// One generated question ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    /// "Similar question 1", "Similar question 2", ...
    pub label: String,
    pub text: String,
}

/// View model for the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedResult {
    /// Nothing generated yet.
    Placeholder,
    Generating,
    Questions(Vec<PresentedQuestion>),
    Failed { reason: String },
}

/// Presents results and owns the clipboard seam.
#[derive(Clone)]
pub struct ResultPresenter {
    clipboard: Arc<dyn ClipboardProvider>,
}

impl std::fmt::Debug for ResultPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultPresenter").finish_non_exhaustive()
    }
}

impl ResultPresenter {
    pub fn new(clipboard: Arc<dyn ClipboardProvider>) -> Self {
        Self { clipboard }
    }

    pub fn present(&self, state: &GenerationState) -> PresentedResult {
        match state {
            GenerationState::Idle => PresentedResult::Placeholder,
            GenerationState::Requesting { .. } => PresentedResult::Generating,
            GenerationState::Succeeded { items } => PresentedResult::Questions(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, text)| PresentedQuestion {
                        label: format!("Similar question {}", i + 1),
                        text: text.clone(),
                    })
                    .collect(),
            ),
            GenerationState::Failed { reason } => PresentedResult::Failed {
                reason: reason.clone(),
            },
        }
    }

    /// Copy `text` verbatim.
    pub async fn copy(&self, text: &str) -> WorkflowResult<()> {
        self.clipboard.set_text(text).await.map_err(|e| {
            tracing::warn!("clipboard write failed: {}", e);
            e
        })?;
        tracing::debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockClipboard;
    use crate::error::WorkflowError;
    use uuid::Uuid;

    fn presenter() -> (ResultPresenter, MockClipboard) {
        let clipboard = MockClipboard::new();
        (ResultPresenter::new(Arc::new(clipboard.clone())), clipboard)
    }

    #[test]
    fn test_present_each_state() {
        let (presenter, _) = presenter();
        assert_eq!(
            presenter.present(&GenerationState::Idle),
            PresentedResult::Placeholder
        );
        assert_eq!(
            presenter.present(&GenerationState::Requesting {
                request_id: Uuid::new_v4()
            }),
            PresentedResult::Generating
        );
        assert_eq!(
            presenter.present(&GenerationState::Failed {
                reason: "nope".into()
            }),
            PresentedResult::Failed {
                reason: "nope".into()
            }
        );
    }

    #[test]
    fn test_present_numbers_questions() {
        let (presenter, _) = presenter();
        let state = GenerationState::Succeeded {
            items: vec!["2x+3=7".into()],
        };
        assert_eq!(
            presenter.present(&state),
            PresentedResult::Questions(vec![PresentedQuestion {
                label: "Similar question 1".into(),
                text: "2x+3=7".into(),
            }])
        );
    }

    #[tokio::test]
    async fn test_copy_literal_text() {
        let (presenter, clipboard) = presenter();
        presenter.copy("  x² + 1\n").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("  x² + 1\n"));
    }

    #[tokio::test]
    async fn test_copy_denied() {
        let (presenter, clipboard) = presenter();
        clipboard.set_deny(true);
        assert!(matches!(
            presenter.copy("x").await,
            Err(WorkflowError::Clipboard(_))
        ));
        assert!(clipboard.copies().is_empty());
    }
}
