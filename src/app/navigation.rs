//! Cursor movement over the selection columns and workspace lists.

use super::types::ColumnItem;
use super::App;
use crate::workflow::SelectionField;

impl App {
    /// Items of `field`'s column given the current selection. Empty until
    /// the previous field is chosen.
    pub fn column_items(&self, field: SelectionField) -> Vec<ColumnItem> {
        let catalog = self.session.catalog();
        let selection = self.session.gate().current_selection();
        let parent = field.prev().map(|prev| selection.get(prev));

        match (field, parent) {
            (SelectionField::Faculty, _) => catalog
                .faculties()
                .into_iter()
                .map(|f| ColumnItem { id: f.id, name: f.name })
                .collect(),
            (_, Some(None)) | (_, None) => Vec::new(),
            (SelectionField::Department, Some(Some(parent))) => catalog
                .departments(parent)
                .into_iter()
                .map(|d| ColumnItem { id: d.id, name: d.name })
                .collect(),
            (SelectionField::Subject, Some(Some(parent))) => catalog
                .subjects(parent)
                .into_iter()
                .map(|s| ColumnItem { id: s.id, name: s.name })
                .collect(),
            (SelectionField::Professor, Some(Some(parent))) => catalog
                .professors(parent)
                .into_iter()
                .map(|p| ColumnItem { id: p.id, name: p.name })
                .collect(),
        }
    }

    pub fn column_cursor(&self, field: SelectionField) -> usize {
        self.column_cursors[field.index()]
    }

    pub fn move_column_cursor(&mut self, delta: isize) {
        let len = self.column_items(self.active_column).len();
        let cursor = &mut self.column_cursors[self.active_column.index()];
        *cursor = step(*cursor, delta, len);
    }

    pub fn focus_column(&mut self, field: SelectionField) {
        self.active_column = field;
    }

    /// Select the highlighted row of the active column and move right.
    pub fn select_highlighted(&mut self) {
        let field = self.active_column;
        let items = self.column_items(field);
        let Some(item) = items.get(self.column_cursor(field)) else {
            return;
        };

        if self.session.select(field, &item.id).is_ok() {
            if let Some(next) = field.next() {
                for later in &SelectionField::ALL[next.index()..] {
                    self.column_cursors[later.index()] = 0;
                }
                self.active_column = next;
            }
        }
    }

    pub fn move_exam_cursor(&mut self, delta: isize) {
        let len = self.session.workspace().map_or(0, |ws| ws.exams().len());
        self.exam_cursor = step(self.exam_cursor, delta, len);
    }

    pub fn move_result_cursor(&mut self, delta: isize) {
        let len = match self.session.workspace().map(|ws| ws.generation()) {
            Some(crate::workflow::GenerationState::Succeeded { items }) => items.len(),
            _ => 0,
        };
        self.result_cursor = step(self.result_cursor, delta, len);
    }
}

/// Move within `0..len`, clamped at both ends.
fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(2, 1, 3), 2);
        assert_eq!(step(1, 1, 3), 2);
        assert_eq!(step(5, 0, 0), 0);
    }
}
