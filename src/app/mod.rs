//! Application state for the TUI.
//!
//! [`App`] wraps one workflow [`Session`] together with the purely visual
//! state: the active screen, pane focus, list cursors, the source editor
//! buffer and the attach prompt. Keys are handled in [`handlers`]; results of
//! spawned work come back as [`AppMessage`]s over an unbounded channel.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{ColumnItem, Focus, Screen};

use std::time::Instant;
use tokio::sync::mpsc;

use crate::workflow::{GenerationState, Session, SelectionField, SourceContent};

/// Main application state.
pub struct App {
    pub session: Session,
    pub screen: Screen,
    pub focus: Focus,
    /// Column receiving keys on the selection screen.
    pub active_column: SelectionField,
    pub column_cursors: [usize; 4],
    pub exam_cursor: usize,
    pub result_cursor: usize,
    /// Text shown in the source editor.
    pub editor: String,
    /// Path being typed after Ctrl+O, if the prompt is open.
    pub attach_prompt: Option<String>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session,
            screen: Screen::Selection,
            focus: Focus::Source,
            active_column: SelectionField::Faculty,
            column_cursors: [0; 4],
            exam_cursor: 0,
            result_cursor: 0,
            editor: String::new(),
            attach_prompt: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Start directly in a professor's workspace, skipping the selection.
    pub fn open_professor(&mut self, professor_id: &str) {
        self.session.open_professor(professor_id);
        self.enter_workspace();
    }

    fn enter_workspace(&mut self) {
        self.screen = Screen::Workspace;
        self.focus = Focus::Source;
        self.exam_cursor = 0;
        self.result_cursor = 0;
        self.editor.clear();
        self.attach_prompt = None;
        self.mark_dirty();
    }

    /// Back to an empty selection screen.
    pub fn leave_workspace(&mut self) {
        self.session.back();
        self.screen = Screen::Selection;
        self.active_column = SelectionField::Faculty;
        self.column_cursors = [0; 4];
        self.editor.clear();
        self.attach_prompt = None;
        self.mark_dirty();
    }

    /// Keep the editor buffer in step with the session's source.
    fn sync_editor_from_source(&mut self) {
        if let Some(ws) = self.session.workspace() {
            self.editor = match ws.source() {
                SourceContent::Typed { text } | SourceContent::Imported { text, .. } => text.clone(),
                SourceContent::AttachedFile { .. } => String::new(),
            };
        }
    }

    pub fn is_generating(&self) -> bool {
        self.session.is_generating()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Called on every loop tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let before = self.session.notices().len();
        self.session.notices_mut().prune(Instant::now());
        if self.session.notices().len() != before || self.is_generating() {
            self.mark_dirty();
        }
    }

    /// Apply a message from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::GenerationSettled(outcome) => {
                if self.session.settle_generation(outcome) {
                    self.result_cursor = 0;
                    if let Some(GenerationState::Succeeded { .. }) =
                        self.session.workspace().map(|ws| ws.generation())
                    {
                        self.focus = Focus::Results;
                    }
                }
            }
        }
    }
}
