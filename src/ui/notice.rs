//! Notice overlay, drawn on top of everything near the top edge.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACTIVE, COLOR_DIALOG_BG, COLOR_ERROR, COLOR_INFO};
use crate::workflow::{Notice, NoticeLevel};

const MIN_WIDTH: u16 = 16;

fn level_color(level: NoticeLevel) -> ratatui::style::Color {
    match level {
        NoticeLevel::Info => COLOR_INFO,
        NoticeLevel::Success => COLOR_ACTIVE,
        NoticeLevel::Error => COLOR_ERROR,
    }
}

/// Where the popup for `notice` goes inside `area`, or `None` if the
/// terminal is too small to show it.
pub(super) fn notice_rect(area: Rect, notice: &Notice) -> Option<Rect> {
    if area.width < MIN_WIDTH + 2 || area.height < 5 {
        return None;
    }
    let max_inner = area.width.saturating_sub(6);
    let text_width = UnicodeWidthStr::width(notice.message.as_str()) as u16;
    let inner = text_width.clamp(MIN_WIDTH, max_inner);
    let lines = text_width.div_ceil(inner).max(1);
    let width = inner + 2;
    let height = (lines + 2).min(area.height.saturating_sub(2));

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1,
        width,
        height,
    })
}

pub(super) fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    if notice.is_expired(Instant::now()) {
        return;
    }
    let Some(popup) = notice_rect(area, notice) else {
        return;
    };

    let color = level_color(notice.level);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(notice.message.clone())
            .style(Style::default().bg(COLOR_DIALOG_BG).fg(color))
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(Style::default().fg(color))),
        popup,
    );
}
