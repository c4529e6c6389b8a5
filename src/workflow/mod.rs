//! The question-acquisition and generation workflow.
//!
//! - [`selection`]: the gate that must be completed before anything else
//! - [`source`]: typed, imported or attached source content
//! - [`preview`]: transient previews backing attached files
//! - [`generation`]: the single-flight generation client
//! - [`presenter`]: result view model and clipboard copy
//! - [`notice`]: transient user notices
//! - [`session`]: ties the pieces together for one user session

pub mod generation;
pub mod notice;
pub mod presenter;
pub mod preview;
pub mod selection;
pub mod session;
pub mod source;

pub use generation::{
    GenerationClient, GenerationOutcome, GenerationRequest, GenerationState, PendingGeneration,
    GENERATE_PATH, GENERIC_FAILURE,
};
pub use notice::{Notice, NoticeBoard, NoticeLevel, NOTICE_TTL};
pub use presenter::{PresentedQuestion, PresentedResult, ResultPresenter};
pub use preview::{PreviewHandle, PreviewSource, PreviewStore};
pub use selection::{SelectionField, SelectionGate, SelectionState};
pub use session::{Session, Workspace};
pub use source::{file_reference, DocumentKind, SourceAcquirer, SourceContent};
