//! Errors raised by the question-generation workflow.
//!
//! Every variant is recoverable: the session turns it into a transient
//! notice and stays interactable.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::ClipboardError;
use crate::workflow::selection::SelectionField;

/// Result alias used by workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// User-facing failures of the generation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Submit was attempted before all four selection fields were chosen.
    #[error("selection is incomplete")]
    Validation,

    /// A selection field was set while an earlier one is still empty.
    #[error("cannot select {field} before {missing}")]
    SelectionOutOfOrder {
        field: SelectionField,
        missing: SelectionField,
    },

    /// The requested exam does not exist.
    #[error("exam '{exam_id}' not found")]
    NotFound { exam_id: String },

    /// Import was requested without choosing an exam.
    #[error("no exam selected for import")]
    SelectionRequired,

    /// An attachment is not an accepted document type.
    #[error("'{display_name}' is not a PDF document")]
    UnsupportedType { display_name: String },

    /// Generation was requested with blank source text.
    #[error("source question is empty")]
    EmptyInput,

    /// No API key is stored in the settings file.
    #[error("no API key configured")]
    MissingCredential,

    /// A generation request is already in flight.
    #[error("a generation request is already running")]
    Busy,

    /// Writing to the clipboard failed.
    #[error("clipboard: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Reading a local file failed.
    #[error("could not read '{path}': {message}")]
    Io { path: String, message: String },
}

impl WorkflowError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WorkflowError::Validation
            | WorkflowError::SelectionOutOfOrder { .. }
            | WorkflowError::NotFound { .. }
            | WorkflowError::SelectionRequired
            | WorkflowError::UnsupportedType { .. }
            | WorkflowError::EmptyInput => ErrorCategory::User,
            WorkflowError::MissingCredential => ErrorCategory::Configuration,
            WorkflowError::Busy => ErrorCategory::Conflict,
            WorkflowError::Clipboard(_) | WorkflowError::Io { .. } => ErrorCategory::System,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            WorkflowError::Validation => "E_SEL_INCOMPLETE",
            WorkflowError::SelectionOutOfOrder { .. } => "E_SEL_ORDER",
            WorkflowError::NotFound { .. } => "E_SRC_NOT_FOUND",
            WorkflowError::SelectionRequired => "E_SRC_NO_EXAM",
            WorkflowError::UnsupportedType { .. } => "E_SRC_TYPE",
            WorkflowError::EmptyInput => "E_GEN_EMPTY",
            WorkflowError::MissingCredential => "E_GEN_NO_KEY",
            WorkflowError::Busy => "E_GEN_BUSY",
            WorkflowError::Clipboard(_) => "E_CLIPBOARD",
            WorkflowError::Io { .. } => "E_IO",
        }
    }

    /// Get the message shown to the user in a notice.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Validation => {
                "Select a faculty, department, subject and professor first.".to_string()
            }
            WorkflowError::SelectionOutOfOrder { missing, .. } => {
                format!("Select a {} first.", missing)
            }
            WorkflowError::NotFound { .. } => "That exam could not be found.".to_string(),
            WorkflowError::SelectionRequired => "Choose an exam to import.".to_string(),
            WorkflowError::UnsupportedType { .. } => "Only PDF files are allowed.".to_string(),
            WorkflowError::EmptyInput => "Enter the original question first.".to_string(),
            WorkflowError::MissingCredential => {
                "No API key is registered.".to_string()
            }
            WorkflowError::Busy => "A similar question is already being generated.".to_string(),
            WorkflowError::Clipboard(_) => "Could not copy to the clipboard.".to_string(),
            WorkflowError::Io { path, .. } => format!("Could not read {}.", path),
        }
    }
}
