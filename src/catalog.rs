//! The academic catalog: faculties, departments, subjects, professors and
//! their past exams.
//!
//! The workflow only talks to the [`Catalog`] trait. [`StaticCatalog`] is
//! the shipped implementation, seeded with built-in sample data or loaded
//! from a JSON file (`KAKOMON_CATALOG`).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{Department, Exam, Faculty, Professor, Subject};

/// Read-only access to the catalog.
pub trait Catalog: Send + Sync {
    fn faculties(&self) -> Vec<Faculty>;
    fn departments(&self, faculty_id: &str) -> Vec<Department>;
    fn subjects(&self, department_id: &str) -> Vec<Subject>;
    fn professors(&self, subject_id: &str) -> Vec<Professor>;
    fn lookup_professor(&self, id: &str) -> Option<Professor>;
    fn lookup_subject(&self, id: &str) -> Option<Subject>;
    fn list_exams_for_professor(&self, professor_id: &str) -> Vec<Exam>;
    fn find_exam(&self, id: &str) -> Option<Exam>;
}

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialized catalog layout, one flat list per level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub faculties: Vec<Faculty>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub exams: Vec<Exam>,
}

/// In-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    data: CatalogData,
}

impl StaticCatalog {
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: display.clone(),
            source,
        })?;
        let data = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: display,
            source,
        })?;
        Ok(Self::new(data))
    }

    /// The built-in sample catalog.
    pub fn builtin() -> Self {
        fn faculty(id: &str, name: &str) -> Faculty {
            Faculty {
                id: id.into(),
                name: name.into(),
            }
        }
        fn department(id: &str, faculty_id: &str, name: &str) -> Department {
            Department {
                id: id.into(),
                faculty_id: faculty_id.into(),
                name: name.into(),
            }
        }
        fn subject(id: &str, department_id: &str, name: &str) -> Subject {
            Subject {
                id: id.into(),
                department_id: department_id.into(),
                name: name.into(),
            }
        }
        fn professor(id: &str, subject_id: &str, name: &str) -> Professor {
            Professor {
                id: id.into(),
                subject_id: subject_id.into(),
                name: name.into(),
            }
        }
        fn exam(id: &str, professor_id: &str, title: &str, year: Option<u16>, content: &str) -> Exam {
            Exam {
                id: id.into(),
                professor_id: professor_id.into(),
                title: title.into(),
                year,
                content: content.into(),
            }
        }

        Self::new(CatalogData {
            faculties: vec![
                faculty("sci", "Faculty of Science and Engineering"),
                faculty("eco", "Faculty of Economics"),
            ],
            departments: vec![
                department("math", "sci", "Mathematics"),
                department("phys", "sci", "Physics"),
                department("econ", "eco", "Economics"),
            ],
            subjects: vec![
                subject("linalg", "math", "Linear Algebra"),
                subject("calc", "math", "Calculus"),
                subject("mech", "phys", "Classical Mechanics"),
                subject("micro", "econ", "Microeconomics"),
            ],
            professors: vec![
                professor("tanaka", "linalg", "Prof. Tanaka"),
                professor("suzuki", "calc", "Prof. Suzuki"),
                professor("sato", "mech", "Prof. Sato"),
                professor("ito", "micro", "Prof. Ito"),
            ],
            exams: vec![
                exam(
                    "tanaka-2023-mid",
                    "tanaka",
                    "Midterm",
                    Some(2023),
                    "Find the eigenvalues of the matrix A = [[2, 1], [1, 2]].",
                ),
                exam(
                    "tanaka-2022-final",
                    "tanaka",
                    "Final",
                    Some(2022),
                    "/uploads/1700000000000-linalg-final.pdf",
                ),
                exam("suzuki-2023-mid", "suzuki", "Midterm", Some(2023), "Solve x²-5x+6=0"),
                exam(
                    "suzuki-quiz",
                    "suzuki",
                    "Weekly quiz",
                    None,
                    "Differentiate f(x) = x³ sin x.",
                ),
                exam(
                    "sato-2021-final",
                    "sato",
                    "Final",
                    Some(2021),
                    "A 2 kg block slides down a frictionless 30° incline. Find its acceleration.",
                ),
                exam(
                    "ito-2023-final",
                    "ito",
                    "Final",
                    Some(2023),
                    "Derive the demand function for U(x, y) = x^0.5 y^0.5 with income M.",
                ),
            ],
        })
    }
}

impl Catalog for StaticCatalog {
    fn faculties(&self) -> Vec<Faculty> {
        self.data.faculties.clone()
    }

    fn departments(&self, faculty_id: &str) -> Vec<Department> {
        self.data
            .departments
            .iter()
            .filter(|d| d.faculty_id == faculty_id)
            .cloned()
            .collect()
    }

    fn subjects(&self, department_id: &str) -> Vec<Subject> {
        self.data
            .subjects
            .iter()
            .filter(|s| s.department_id == department_id)
            .cloned()
            .collect()
    }

    fn professors(&self, subject_id: &str) -> Vec<Professor> {
        self.data
            .professors
            .iter()
            .filter(|p| p.subject_id == subject_id)
            .cloned()
            .collect()
    }

    fn lookup_professor(&self, id: &str) -> Option<Professor> {
        self.data.professors.iter().find(|p| p.id == id).cloned()
    }

    fn lookup_subject(&self, id: &str) -> Option<Subject> {
        self.data.subjects.iter().find(|s| s.id == id).cloned()
    }

    fn list_exams_for_professor(&self, professor_id: &str) -> Vec<Exam> {
        self.data
            .exams
            .iter()
            .filter(|e| e.professor_id == professor_id)
            .cloned()
            .collect()
    }

    fn find_exam(&self, id: &str) -> Option<Exam> {
        self.data.exams.iter().find(|e| e.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_hierarchy_is_connected() {
        let catalog = StaticCatalog::builtin();
        for faculty in catalog.faculties() {
            let departments = catalog.departments(&faculty.id);
            assert!(!departments.is_empty(), "{} has no departments", faculty.id);
            for department in departments {
                for subject in catalog.subjects(&department.id) {
                    assert!(!catalog.professors(&subject.id).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_lookups() {
        let catalog = StaticCatalog::builtin();
        let professor = catalog.lookup_professor("suzuki").unwrap();
        assert_eq!(catalog.lookup_subject(&professor.subject_id).unwrap().name, "Calculus");
        assert!(catalog.lookup_professor("nobody").is_none());
        assert_eq!(catalog.list_exams_for_professor("suzuki").len(), 2);
        assert_eq!(
            catalog.find_exam("suzuki-2023-mid").unwrap().content,
            "Solve x²-5x+6=0"
        );
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"faculties":[{"id":"f","name":"F"}],"exams":[{"id":"e","professor_id":"p","title":"T","content":"c"}]}"#,
        )
        .unwrap();

        let catalog = StaticCatalog::from_json_file(&path).unwrap();
        assert_eq!(catalog.faculties().len(), 1);
        assert!(catalog.departments("f").is_empty());
        assert!(catalog.find_exam("e").is_some());
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            StaticCatalog::from_json_file(&missing),
            Err(CatalogError::Read { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[").unwrap();
        assert!(matches!(
            StaticCatalog::from_json_file(&bad),
            Err(CatalogError::Parse { .. })
        ));
    }
}
