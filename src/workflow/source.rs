//! Source acquirer: owns the single active source of the question text.
//!
//! Exactly one [`SourceContent`] is active. Every transition that replaces
//! an attached transient preview releases it before the next one is created,
//! so a session never holds more than one preview at a time. A failed
//! transition leaves the current content untouched.

use bytes::Bytes;

use super::preview::{PreviewSource, PreviewStore};
use crate::catalog::Catalog;
use crate::error::{WorkflowError, WorkflowResult};

/// Magic prefix of a PDF document.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Accepted attachment document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
}

impl DocumentKind {
    /// Identify a document from its leading bytes.
    pub fn sniff(data: &[u8]) -> Option<DocumentKind> {
        data.starts_with(PDF_MAGIC).then_some(DocumentKind::Pdf)
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
        }
    }
}

/// The source the next generation request is built from.
#[derive(Debug)]
pub enum SourceContent {
    /// Text entered by the user.
    Typed { text: String },
    /// Text copied from a past exam.
    Imported { exam_id: String, text: String },
    /// A reference document. Carries no text of its own.
    AttachedFile {
        display_name: String,
        preview: PreviewSource,
    },
}

impl Default for SourceContent {
    fn default() -> Self {
        SourceContent::Typed {
            text: String::new(),
        }
    }
}

impl SourceContent {
    /// Short label for status lines.
    pub fn kind_label(&self) -> &'static str {
        match self {
            SourceContent::Typed { .. } => "typed",
            SourceContent::Imported { .. } => "imported",
            SourceContent::AttachedFile { .. } => "attachment",
        }
    }
}

/// If `content` starts with a path-like token, return that token.
///
/// Stored exam content that starts with `/` (for example
/// `/uploads/123-sample.pdf`) refers to an uploaded file rather than inline
/// question text.
pub fn file_reference(content: &str) -> Option<&str> {
    let token = content.split_whitespace().next()?;
    (token.starts_with('/') && token.len() > 1).then_some(token)
}

fn file_name(path: &str) -> String {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}

/// Manages the active [`SourceContent`] and its preview resource.
#[derive(Debug)]
pub struct SourceAcquirer {
    content: SourceContent,
    previews: PreviewStore,
}

impl SourceAcquirer {
    pub fn new(previews: PreviewStore) -> Self {
        Self {
            content: SourceContent::default(),
            previews,
        }
    }

    pub fn content(&self) -> &SourceContent {
        &self.content
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    /// Release the active transient preview, if any. Safe to repeat.
    fn release_active(&mut self) {
        if let SourceContent::AttachedFile { preview, .. } = &mut self.content {
            preview.release();
        }
    }

    /// Replace the source with typed text.
    pub fn set_typed(&mut self, text: impl Into<String>) {
        self.release_active();
        self.content = SourceContent::Typed { text: text.into() };
    }

    /// Import a past exam's stored content.
    ///
    /// Content starting with a path-like token becomes an attachment bound
    /// to that durable path; anything else becomes imported text.
    pub fn import_from(&mut self, catalog: &dyn Catalog, exam_id: Option<&str>) -> WorkflowResult<()> {
        let exam_id = exam_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(WorkflowError::SelectionRequired)?;
        let exam = catalog
            .find_exam(exam_id)
            .ok_or_else(|| WorkflowError::NotFound {
                exam_id: exam_id.to_string(),
            })?;

        self.release_active();
        self.content = match file_reference(&exam.content) {
            Some(path) => {
                tracing::info!(exam = %exam.id, path, "imported exam is a file reference");
                SourceContent::AttachedFile {
                    display_name: file_name(path),
                    preview: PreviewSource::Durable {
                        path: path.to_string(),
                    },
                }
            }
            None => {
                tracing::info!(exam = %exam.id, "imported exam text");
                SourceContent::Imported {
                    exam_id: exam.id,
                    text: exam.content,
                }
            }
        };
        Ok(())
    }

    /// Attach a local document and create a transient preview for it.
    pub fn attach_file(&mut self, data: Bytes, display_name: impl Into<String>) -> WorkflowResult<()> {
        let display_name = display_name.into();
        if DocumentKind::sniff(&data).is_none() {
            return Err(WorkflowError::UnsupportedType { display_name });
        }

        self.release_active();
        let handle = self.previews.create(data);
        tracing::info!(file = %display_name, preview = %handle.id(), "attached document");
        self.content = SourceContent::AttachedFile {
            display_name,
            preview: PreviewSource::Transient(handle),
        };
        Ok(())
    }

    /// Drop any attachment and go back to empty typed text.
    pub fn clear_attachment(&mut self) {
        self.release_active();
        self.content = SourceContent::default();
    }

    /// Text to submit for generation. Attachments have none.
    pub fn effective_text(&self) -> Option<&str> {
        match &self.content {
            SourceContent::Typed { text } | SourceContent::Imported { text, .. } => Some(text),
            SourceContent::AttachedFile { .. } => None,
        }
    }
}
