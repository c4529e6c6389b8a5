//! One generation session: the selection gate, then a workspace scoped to the
//! chosen professor.
//!
//! The [`Workspace`] (source acquirer + generation client) only exists after
//! a successful submit, so generation is structurally unreachable before the
//! selection is complete. Every workflow error is pushed onto the
//! [`NoticeBoard`] before being returned, and never leaves the session in a
//! non-interactable state.

use bytes::Bytes;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use super::generation::{GenerationClient, GenerationOutcome, GenerationState, PendingGeneration};
use super::notice::{NoticeBoard, NoticeLevel};
use super::presenter::{PresentedResult, ResultPresenter};
use super::preview::PreviewStore;
use super::selection::{SelectionField, SelectionGate};
use super::source::{SourceAcquirer, SourceContent};
use crate::catalog::Catalog;
use crate::error::{WorkflowError, WorkflowResult};
use crate::models::{Exam, Professor, Subject};
use crate::traits::{ClipboardProvider, HttpClient, SettingsProvider};

/// The context-established half of a session.
#[derive(Debug)]
pub struct Workspace {
    professor_id: String,
    professor: Option<Professor>,
    subject: Option<Subject>,
    exams: Vec<Exam>,
    source: SourceAcquirer,
    generation: GenerationClient,
}

impl Workspace {
    pub fn professor_id(&self) -> &str {
        &self.professor_id
    }

    /// `None` when the id did not resolve in the catalog.
    pub fn professor(&self) -> Option<&Professor> {
        self.professor.as_ref()
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// Past exams of the professor, importable as source content.
    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn source(&self) -> &SourceContent {
        self.source.content()
    }

    pub fn effective_text(&self) -> Option<&str> {
        self.source.effective_text()
    }

    pub fn generation(&self) -> &GenerationState {
        self.generation.state()
    }
}

/// Dependencies shared by every workspace a session opens.
struct Services {
    http: Arc<dyn HttpClient>,
    settings: Arc<dyn SettingsProvider>,
    endpoint: String,
}

pub struct Session {
    catalog: Arc<dyn Catalog>,
    gate: SelectionGate,
    workspace: Option<Workspace>,
    presenter: ResultPresenter,
    notices: NoticeBoard,
    services: Services,
    previews: PreviewStore,
    /// Request dispatched from any workspace and not yet settled.
    in_flight: Option<Uuid>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("gate", &self.gate)
            .field("workspace", &self.workspace)
            .field("notices", &self.notices.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        http: Arc<dyn HttpClient>,
        settings: Arc<dyn SettingsProvider>,
        clipboard: Arc<dyn ClipboardProvider>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            gate: SelectionGate::new(),
            workspace: None,
            presenter: ResultPresenter::new(clipboard),
            notices: NoticeBoard::default(),
            services: Services {
                http,
                settings,
                endpoint: endpoint.into(),
            },
            previews: PreviewStore::new(),
            in_flight: None,
        }
    }

    /// Replace the notice board, e.g. to use a configured TTL.
    pub fn with_notices(mut self, notices: NoticeBoard) -> Self {
        self.notices = notices;
        self
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub fn gate(&self) -> &SelectionGate {
        &self.gate
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    fn surface<T>(&mut self, result: WorkflowResult<T>) -> WorkflowResult<T> {
        if let Err(e) = &result {
            self.notices.push_error(e);
        }
        result
    }

    fn workspace_mut(&mut self) -> WorkflowResult<&mut Workspace> {
        self.workspace.as_mut().ok_or(WorkflowError::Validation)
    }

    // ---- selection phase ----

    pub fn select(&mut self, field: SelectionField, id: &str) -> WorkflowResult<()> {
        let result = self.gate.set(field, id);
        self.surface(result)
    }

    /// Validate the selection and open the workspace for its professor.
    pub fn submit_selection(&mut self) -> WorkflowResult<()> {
        let result = self.gate.submit();
        let professor_id = self.surface(result)?;
        self.open_professor(&professor_id);
        Ok(())
    }

    /// Open a workspace directly for a professor id.
    ///
    /// An id missing from the catalog still opens a workspace, just without
    /// professor details or past exams.
    pub fn open_professor(&mut self, professor_id: &str) -> &Workspace {
        let professor = self.catalog.lookup_professor(professor_id);
        let subject = professor
            .as_ref()
            .and_then(|p| self.catalog.lookup_subject(&p.subject_id));
        let exams = self.catalog.list_exams_for_professor(professor_id);
        if professor.is_none() {
            tracing::warn!(professor = professor_id, "professor not found in catalog");
        }
        tracing::info!(professor = professor_id, exams = exams.len(), "workspace opened");

        self.workspace.insert(Workspace {
            professor_id: professor_id.to_string(),
            professor,
            subject,
            exams,
            source: SourceAcquirer::new(self.previews.clone()),
            generation: GenerationClient::new(
                Arc::clone(&self.services.http),
                Arc::clone(&self.services.settings),
                self.services.endpoint.clone(),
            ),
        })
    }

    /// Leave the workspace and start a fresh selection.
    ///
    /// Dropping the workspace releases its preview. An in-flight request is
    /// not cancelled; its outcome is ignored when it arrives.
    pub fn back(&mut self) {
        self.workspace = None;
        self.gate.reset();
    }

    // ---- source acquisition ----

    pub fn set_typed(&mut self, text: impl Into<String>) -> WorkflowResult<()> {
        let result = self.workspace_mut().map(|ws| ws.source.set_typed(text));
        self.surface(result)
    }

    pub fn import_exam(&mut self, exam_id: Option<&str>) -> WorkflowResult<()> {
        let catalog = Arc::clone(&self.catalog);
        let result = self
            .workspace_mut()
            .and_then(|ws| ws.source.import_from(catalog.as_ref(), exam_id));
        self.surface(result)
    }

    pub fn attach_file(&mut self, data: Bytes, display_name: &str) -> WorkflowResult<()> {
        let result = self
            .workspace_mut()
            .and_then(|ws| ws.source.attach_file(data, display_name));
        self.surface(result)
    }

    /// Read a local file and attach it.
    pub async fn attach_path(&mut self, path: &Path) -> WorkflowResult<()> {
        let result = match tokio::fs::read(path).await {
            Ok(data) => {
                let display_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                return self.attach_file(Bytes::from(data), &display_name);
            }
            Err(e) => Err(WorkflowError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        };
        self.surface(result)
    }

    pub fn clear_attachment(&mut self) -> WorkflowResult<()> {
        let result = self.workspace_mut().map(|ws| ws.source.clear_attachment());
        self.surface(result)
    }

    // ---- generation ----

    /// True while a dispatched request has not come back, even if the
    /// workspace that sent it has been closed.
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start generating from the current source text.
    ///
    /// An attachment has no text, so it fails like an empty source. Only one
    /// request per session is in flight; leaving and reopening a workspace
    /// does not lift that.
    pub async fn begin_generation(&mut self) -> WorkflowResult<PendingGeneration> {
        let result = match (self.in_flight, self.workspace.as_mut()) {
            (Some(_), _) => Err(WorkflowError::Busy),
            (None, Some(ws)) => {
                let text = ws.source.effective_text().unwrap_or_default().to_string();
                ws.generation.begin(&text).await
            }
            (None, None) => Err(WorkflowError::Validation),
        };
        if let Ok(pending) = &result {
            self.in_flight = Some(pending.request_id());
        }
        self.surface(result)
    }

    /// Fold a dispatched request's outcome back in and notify the user.
    pub fn settle_generation(&mut self, outcome: GenerationOutcome) -> bool {
        if self.in_flight == Some(outcome.request_id) {
            self.in_flight = None;
        }
        let Some(ws) = self.workspace.as_mut() else {
            tracing::debug!(request = %outcome.request_id, "outcome arrived after workspace closed");
            return false;
        };
        if !ws.generation.settle(outcome) {
            return false;
        }
        match ws.generation.state() {
            GenerationState::Succeeded { .. } => {
                self.notices
                    .push(NoticeLevel::Success, "Similar question generated.");
            }
            GenerationState::Failed { reason } => {
                let reason = reason.clone();
                self.notices.push(NoticeLevel::Error, reason);
            }
            _ => {}
        }
        true
    }

    /// Begin, dispatch and settle in one await.
    pub async fn generate(&mut self) -> WorkflowResult<()> {
        let pending = self.begin_generation().await?;
        let outcome = pending.dispatch().await;
        self.settle_generation(outcome);
        Ok(())
    }

    pub fn presented(&self) -> PresentedResult {
        match &self.workspace {
            Some(ws) => self.presenter.present(ws.generation.state()),
            None => PresentedResult::Placeholder,
        }
    }

    /// Copy the `index`-th generated question.
    ///
    /// Returns `Ok(false)` when there is nothing at that index.
    pub async fn copy_result(&mut self, index: usize) -> WorkflowResult<bool> {
        let text = match self.workspace.as_ref().map(|ws| ws.generation.state()) {
            Some(GenerationState::Succeeded { items }) => items.get(index).cloned(),
            _ => None,
        };
        let Some(text) = text else {
            self.notices.push(NoticeLevel::Info, "Nothing to copy yet.");
            return Ok(false);
        };

        let result = self.presenter.copy(&text).await;
        self.surface(result)?;
        self.notices.push(NoticeLevel::Success, "Copied to clipboard.");
        Ok(true)
    }
}
