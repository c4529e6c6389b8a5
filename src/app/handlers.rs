//! Keyboard and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

use super::{App, AppMessage, Focus, Screen};

impl App {
    /// Handle one key press.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Selection => self.handle_selection_key(key),
            Screen::Workspace => self.handle_workspace_key(key, ctrl).await,
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                self.session.notices_mut().dismiss();
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_column_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_column_cursor(1),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                if let Some(prev) = self.active_column.prev() {
                    self.focus_column(prev);
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                if let Some(next) = self.active_column.next() {
                    self.focus_column(next);
                }
            }
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Char('s') => {
                if self.session.submit_selection().is_ok() {
                    self.enter_workspace();
                }
            }
            _ => {}
        }
    }

    async fn handle_workspace_key(&mut self, key: KeyEvent, ctrl: bool) {
        if self.attach_prompt.is_some() {
            self.handle_attach_prompt_key(key).await;
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('g') => self.start_generation().await,
                KeyCode::Char('o') => self.attach_prompt = Some(String::new()),
                KeyCode::Char('x') => {
                    if self.session.clear_attachment().is_ok() {
                        self.editor.clear();
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.session.notices_mut().dismiss().is_none() {
                    self.leave_workspace();
                }
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Source => self.handle_editor_key(key),
            Focus::Exams => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_exam_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_exam_cursor(1),
                KeyCode::Enter => self.import_highlighted_exam(),
                _ => {}
            },
            Focus::Results => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_result_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_result_cursor(1),
                KeyCode::Char('c') => {
                    let _ = self.session.copy_result(self.result_cursor).await;
                }
                _ => {}
            },
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) => self.editor.push(ch),
            KeyCode::Enter => self.editor.push('\n'),
            KeyCode::Backspace => {
                self.editor.pop();
            }
            _ => return,
        }
        let _ = self.session.set_typed(self.editor.clone());
    }

    async fn handle_attach_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.attach_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.attach_prompt = None,
            KeyCode::Char(ch) => prompt.push(ch),
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Enter => {
                let raw = prompt.trim().to_string();
                self.attach_prompt = None;
                if raw.is_empty() {
                    return;
                }
                if self.session.attach_path(&expand_home(&raw)).await.is_ok() {
                    self.editor.clear();
                }
            }
            _ => {}
        }
    }

    /// Insert pasted text into the attach prompt or the source editor.
    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        if let Some(prompt) = self.attach_prompt.as_mut() {
            prompt.push_str(text.trim_end_matches(['\r', '\n']));
            return;
        }
        if self.screen == Screen::Workspace && self.focus == Focus::Source {
            self.editor.push_str(&text.replace("\r\n", "\n"));
            let _ = self.session.set_typed(self.editor.clone());
        }
    }

    fn import_highlighted_exam(&mut self) {
        let exam_id = self
            .session
            .workspace()
            .and_then(|ws| ws.exams().get(self.exam_cursor))
            .map(|exam| exam.id.clone());
        if self.session.import_exam(exam_id.as_deref()).is_ok() {
            self.sync_editor_from_source();
            self.focus = Focus::Source;
        }
    }

    /// Validate and spawn a generation request; the outcome arrives as
    /// [`AppMessage::GenerationSettled`].
    async fn start_generation(&mut self) {
        let Ok(pending) = self.session.begin_generation().await else {
            return;
        };
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.dispatch().await;
            let _ = tx.send(AppMessage::GenerationSettled(outcome));
        });
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
