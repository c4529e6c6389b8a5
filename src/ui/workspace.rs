//! Workspace screen: header, source editor, past exams and results.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_PENDING,
};
use crate::app::{App, Focus};
use crate::workflow::{PresentedResult, SourceContent};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn pane(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    Block::bordered()
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border))
}

pub(super) fn render_workspace(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ws) = app.session.workspace() else {
        return;
    };

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(6)]).areas(area);

    let professor = ws
        .professor()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| ws.professor_id().to_string());
    let mut header = vec![Line::from(Span::styled(
        professor,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subject) = ws.subject() {
        header.push(Line::from(Span::styled(
            subject.name.clone(),
            Style::default().fg(COLOR_DIM),
        )));
    }
    frame.render_widget(Paragraph::new(header), header_area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body_area);
    let [source_area, exams_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(8)]).areas(left);

    render_source(frame, source_area, app);
    render_exams(frame, exams_area, app);
    render_results(frame, right, app);

    if let Some(prompt) = &app.attach_prompt {
        render_attach_prompt(frame, area, prompt);
    }
}

fn render_source(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ws) = app.session.workspace() else {
        return;
    };
    let focused = app.focus == Focus::Source;

    let (title, body) = match ws.source() {
        SourceContent::AttachedFile {
            display_name,
            preview,
        } => (
            "Original question (attachment)".to_string(),
            Text::from(vec![
                Line::from(format!("📄 {}", display_name)),
                Line::from(Span::styled(preview.location(), Style::default().fg(COLOR_DIM))),
                Line::from(""),
                Line::from(Span::styled(
                    "Attachments are for reference only. Type or import the question text to generate.",
                    Style::default().fg(COLOR_DIM),
                )),
            ]),
        ),
        source => {
            let title = match source {
                SourceContent::Imported { exam_id, .. } => {
                    format!("Original question (imported from {})", exam_id)
                }
                _ => "Original question".to_string(),
            };
            let body = if app.editor.is_empty() {
                Text::from(Span::styled(
                    "Type the exam question here, or import a past exam.",
                    Style::default().fg(COLOR_DIM),
                ))
            } else {
                let mut text = Text::from(app.editor.clone());
                if focused {
                    text.push_span(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
                }
                text
            };
            (title, body)
        }
    };

    frame.render_widget(
        Paragraph::new(body)
            .block(pane(&title, focused))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_exams(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ws) = app.session.workspace() else {
        return;
    };
    let focused = app.focus == Focus::Exams;

    let rows: Vec<ListItem> = if ws.exams().is_empty() {
        vec![ListItem::new(Span::styled(
            "No past exams",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        ws.exams()
            .iter()
            .map(|exam| ListItem::new(exam.display_title()))
            .collect()
    };

    let mut state = ListState::default();
    if focused && !ws.exams().is_empty() {
        state.select(Some(app.exam_cursor));
    }
    let list = List::new(rows)
        .block(pane("Past exams", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Results;
    let block = pane("Similar questions", focused);

    let text = match app.session.presented() {
        PresentedResult::Placeholder => Text::from(Span::styled(
            "Generated questions appear here.",
            Style::default().fg(COLOR_DIM),
        )),
        PresentedResult::Generating => {
            let frame_idx = (app.tick_count / 6) as usize % SPINNER.len();
            Text::from(Span::styled(
                format!("{} Generating...", SPINNER[frame_idx]),
                Style::default().fg(COLOR_PENDING),
            ))
        }
        PresentedResult::Failed { reason } => {
            Text::from(Span::styled(reason, Style::default().fg(COLOR_ERROR)))
        }
        PresentedResult::Questions(questions) => {
            let mut lines = Vec::new();
            for (i, question) in questions.iter().enumerate() {
                let selected = focused && i == app.result_cursor;
                let label_style = if selected {
                    Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(question.label.clone(), label_style)));
                if question.text.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "(empty response)",
                        Style::default().fg(COLOR_DIM),
                    )));
                } else {
                    lines.extend(question.text.lines().map(|l| Line::from(l.to_string())));
                }
                lines.push(Line::from(""));
            }
            Text::from(lines)
        }
    };

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_attach_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let width = area.width.saturating_sub(8).clamp(20, 80);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height / 3,
        width: width.min(area.width),
        height: 3.min(area.height),
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(format!("{}▏", prompt))
            .style(Style::default().bg(COLOR_DIALOG_BG))
            .block(
                Block::bordered()
                    .title(" Attach PDF (path) ")
                    .border_style(Style::default().fg(COLOR_ACCENT)),
            ),
        popup,
    );
}
