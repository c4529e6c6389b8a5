//! Selection screen: four cascading columns.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::workflow::SelectionField;

fn column_title(field: SelectionField) -> &'static str {
    match field {
        SelectionField::Faculty => "Faculty",
        SelectionField::Department => "Department",
        SelectionField::Subject => "Subject",
        SelectionField::Professor => "Professor",
    }
}

pub(super) fn render_selection(frame: &mut Frame, area: Rect, app: &App) {
    let [title_area, columns_area, summary_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Line::from(Span::styled(
            "Choose a professor to generate similar questions for",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(columns_area);
    for (field, column_area) in SelectionField::ALL.iter().zip(columns.iter()) {
        render_column(frame, *column_area, app, *field);
    }

    let summary = if app.session.gate().is_complete() {
        Span::styled(
            "Selection complete. Press s to continue.",
            Style::default().fg(COLOR_ACTIVE),
        )
    } else {
        Span::styled(
            "Select a faculty, department, subject and professor.",
            Style::default().fg(COLOR_DIM),
        )
    };
    frame.render_widget(Line::from(summary), summary_area);
}

fn render_column(frame: &mut Frame, area: Rect, app: &App, field: SelectionField) {
    let focused = app.active_column == field;
    let chosen = app.session.gate().current_selection().get(field);
    let items = app.column_items(field);

    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::bordered()
        .title(format!(" {} ", column_title(field)))
        .border_style(Style::default().fg(border));

    let rows: Vec<ListItem> = if items.is_empty() {
        let hint = match field.prev() {
            Some(prev) => format!("Select a {} first", prev),
            None => "No entries".to_string(),
        };
        vec![ListItem::new(Span::styled(hint, Style::default().fg(COLOR_DIM)))]
    } else {
        items
            .iter()
            .map(|item| {
                let is_chosen = chosen == Some(item.id.as_str());
                let marker = if is_chosen { "● " } else { "  " };
                let style = if is_chosen {
                    Style::default().fg(COLOR_ACTIVE)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(item.name.clone(), style),
                ]))
            })
            .collect()
    };

    let mut state = ListState::default();
    if focused && !items.is_empty() {
        state.select(Some(app.column_cursor(field)));
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}
