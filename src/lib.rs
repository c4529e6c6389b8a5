//! kakomon - generate similar exam questions from past exams, in the terminal.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod settings;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod upload;
pub mod workflow;
