//! UI rendering.
//!
//! One frame is the active screen plus a footer of key hints, with the
//! newest live notice drawn on top.

mod hints;
mod notice;
mod selection;
mod theme;
mod workspace;

pub use hints::keybinds;
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INFO,
    COLOR_PENDING,
};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};
use std::time::Instant;

use crate::app::{App, Screen};

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [main_area, footer_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    match app.screen {
        Screen::Selection => selection::render_selection(frame, main_area, app),
        Screen::Workspace => workspace::render_workspace(frame, main_area, app),
    }
    hints::render_hints(frame, footer_area, app);

    if let Some(notice) = app.session.notices().latest(Instant::now()) {
        notice::render_notice(frame, area, notice);
    }
}
