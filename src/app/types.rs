//! UI state enums.

/// Which screen is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Faculty, department, subject and professor columns.
    #[default]
    Selection,
    /// Source editor, past exams and results for one professor.
    Workspace,
}

/// Which workspace pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Source,
    Exams,
    Results,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Source => Focus::Exams,
            Focus::Exams => Focus::Results,
            Focus::Results => Focus::Source,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Source => Focus::Results,
            Focus::Exams => Focus::Source,
            Focus::Results => Focus::Exams,
        }
    }
}

/// One row of a selection column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnItem {
    pub id: String,
    pub name: String,
}
