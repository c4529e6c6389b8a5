use serde::{Deserialize, Serialize};

/// A faculty (the top level of the selection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: String,
    pub name: String,
}

/// A department inside a faculty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub faculty_id: String,
    pub name: String,
}

/// A subject taught in a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub department_id: String,
    pub name: String,
}

/// A professor teaching a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: String,
    pub subject_id: String,
    pub name: String,
}

/// A past exam set by a professor.
///
/// `content` is either the question text itself or a path to an uploaded
/// document such as `/uploads/1700000000000-midterm.pdf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub professor_id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    pub content: String,
}

impl Exam {
    /// Title with the year appended when known, e.g. `Midterm (2023)`.
    pub fn display_title(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}
