//! Selection gate: faculty -> department -> subject -> professor.
//!
//! Fields are ordered. A field can only be set once every earlier field is
//! set, and setting a field clears every field after it. Generation becomes
//! reachable only through a successful [`SelectionGate::submit`].

use std::fmt;

use crate::error::{WorkflowError, WorkflowResult};

/// One level of the selection hierarchy, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectionField {
    Faculty,
    Department,
    Subject,
    Professor,
}

impl SelectionField {
    /// All fields in selection order.
    pub const ALL: [SelectionField; 4] = [
        SelectionField::Faculty,
        SelectionField::Department,
        SelectionField::Subject,
        SelectionField::Professor,
    ];

    /// Position of the field in selection order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field after this one, if any.
    pub fn next(self) -> Option<SelectionField> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The field before this one, if any.
    pub fn prev(self) -> Option<SelectionField> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionField::Faculty => "faculty",
            SelectionField::Department => "department",
            SelectionField::Subject => "subject",
            SelectionField::Professor => "professor",
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen ids, each empty until selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub faculty_id: Option<String>,
    pub department_id: Option<String>,
    pub subject_id: Option<String>,
    pub professor_id: Option<String>,
}

impl SelectionState {
    /// The id chosen for `field`.
    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::Faculty => self.faculty_id.as_deref(),
            SelectionField::Department => self.department_id.as_deref(),
            SelectionField::Subject => self.subject_id.as_deref(),
            SelectionField::Professor => self.professor_id.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: SelectionField) -> &mut Option<String> {
        match field {
            SelectionField::Faculty => &mut self.faculty_id,
            SelectionField::Department => &mut self.department_id,
            SelectionField::Subject => &mut self.subject_id,
            SelectionField::Professor => &mut self.professor_id,
        }
    }

    /// Set `field` and clear every later field.
    ///
    /// Fails with [`WorkflowError::SelectionOutOfOrder`] when an earlier
    /// field is still empty; the state is left unchanged in that case.
    pub fn set(&mut self, field: SelectionField, id: impl Into<String>) -> WorkflowResult<()> {
        if let Some(missing) = self.first_missing_before(field) {
            return Err(WorkflowError::SelectionOutOfOrder { field, missing });
        }

        *self.slot_mut(field) = Some(id.into());
        if let Some(next) = field.next() {
            self.clear_from(next);
        }
        Ok(())
    }

    /// Clear `field` and everything after it.
    pub fn clear_from(&mut self, field: SelectionField) {
        for later in &SelectionField::ALL[field.index()..] {
            *self.slot_mut(*later) = None;
        }
    }

    fn first_missing_before(&self, field: SelectionField) -> Option<SelectionField> {
        SelectionField::ALL[..field.index()]
            .iter()
            .copied()
            .find(|earlier| self.get(*earlier).is_none())
    }

    /// True when all four fields are set.
    pub fn is_complete(&self) -> bool {
        SelectionField::ALL.iter().all(|f| self.get(*f).is_some())
    }
}

/// Gate guarding entry into the generation workspace.
#[derive(Debug, Clone, Default)]
pub struct SelectionGate {
    selection: SelectionState,
}

impl SelectionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn set(&mut self, field: SelectionField, id: impl Into<String>) -> WorkflowResult<()> {
        self.selection.set(field, id)
    }

    pub fn clear_from(&mut self, field: SelectionField) {
        self.selection.clear_from(field);
    }

    /// Validate the selection and hand out the professor id that scopes the
    /// rest of the session. The selection is left untouched either way.
    pub fn submit(&self) -> WorkflowResult<String> {
        match (&self.selection.professor_id, self.is_complete()) {
            (Some(professor_id), true) => Ok(professor_id.clone()),
            _ => Err(WorkflowError::Validation),
        }
    }

    /// Back to an empty selection.
    pub fn reset(&mut self) {
        self.selection = SelectionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_gate() -> SelectionGate {
        let mut gate = SelectionGate::new();
        gate.set(SelectionField::Faculty, "sci").unwrap();
        gate.set(SelectionField::Department, "math").unwrap();
        gate.set(SelectionField::Subject, "calc").unwrap();
        gate.set(SelectionField::Professor, "suzuki").unwrap();
        gate
    }

    #[test]
    fn test_field_order_helpers() {
        assert_eq!(SelectionField::Faculty.next(), Some(SelectionField::Department));
        assert_eq!(SelectionField::Professor.next(), None);
        assert_eq!(SelectionField::Faculty.prev(), None);
        assert_eq!(SelectionField::Subject.prev(), Some(SelectionField::Department));
    }

    #[test]
    fn test_submit_complete_returns_professor() {
        assert_eq!(complete_gate().submit().unwrap(), "suzuki");
    }

    #[test]
    fn test_submit_incomplete_fails_and_keeps_state() {
        let mut gate = SelectionGate::new();
        gate.set(SelectionField::Faculty, "sci").unwrap();
        gate.set(SelectionField::Department, "math").unwrap();
        let before = gate.current_selection().clone();

        assert_eq!(gate.submit(), Err(WorkflowError::Validation));
        assert_eq!(gate.current_selection(), &before);
    }

    #[test]
    fn test_empty_gate_submit_fails() {
        assert_eq!(SelectionGate::new().submit(), Err(WorkflowError::Validation));
    }

    #[test]
    fn test_setting_each_field_clears_later_fields() {
        for field in SelectionField::ALL {
            let mut gate = complete_gate();
            gate.set(field, "changed").unwrap();

            let selection = gate.current_selection();
            assert_eq!(selection.get(field), Some("changed"));
            for earlier in &SelectionField::ALL[..field.index()] {
                assert!(selection.get(*earlier).is_some());
            }
            for later in &SelectionField::ALL[field.index() + 1..] {
                assert!(selection.get(*later).is_none(), "{} survived {}", later, field);
            }
        }
    }

    #[test]
    fn test_out_of_order_set_is_rejected() {
        let mut gate = SelectionGate::new();
        gate.set(SelectionField::Faculty, "sci").unwrap();

        let err = gate.set(SelectionField::Subject, "calc").unwrap_err();
        assert_eq!(
            err,
            WorkflowError::SelectionOutOfOrder {
                field: SelectionField::Subject,
                missing: SelectionField::Department,
            }
        );
        assert_eq!(gate.current_selection().subject_id, None);
        assert_eq!(gate.current_selection().faculty_id.as_deref(), Some("sci"));
    }

    #[test]
    fn test_reset_empties_selection() {
        let mut gate = complete_gate();
        gate.reset();
        assert_eq!(gate.current_selection(), &SelectionState::default());
        assert!(!gate.is_complete());
    }
}
