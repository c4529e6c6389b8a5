//! Data models for the academic catalog.
//!
//! The catalog is a strict hierarchy: faculty -> department -> subject ->
//! professor, with past exams hanging off professors.

mod catalog;

pub use catalog::{Department, Exam, Faculty, Professor, Subject};
