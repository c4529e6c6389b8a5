//! Footer key hints for the current screen and focus.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::{App, Focus, Screen};

/// `(key, action)` pairs for the current state.
pub fn keybinds(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.attach_prompt.is_some() {
        return vec![("Enter", "attach"), ("Esc", "cancel")];
    }
    match app.screen {
        Screen::Selection => vec![
            ("←/→", "column"),
            ("↑/↓", "move"),
            ("Enter", "select"),
            ("s", "submit"),
            ("q", "quit"),
        ],
        Screen::Workspace => {
            let mut binds = vec![("Tab", "pane")];
            match app.focus {
                Focus::Source => binds.push(("type", "edit question")),
                Focus::Exams => binds.push(("Enter", "import")),
                Focus::Results => binds.push(("c", "copy")),
            }
            binds.extend([
                ("^G", "generate"),
                ("^O", "attach"),
                ("^X", "clear attachment"),
                ("Esc", "back"),
            ]);
            binds
        }
    }
}

pub(super) fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, (key, action)) in keybinds(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Line::from(spans), area);
}
