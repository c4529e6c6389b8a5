//! Trait abstractions for dependency injection and testability.
//!
//! Every external collaborator of the generation workflow sits behind one of
//! these traits so the workflow can be exercised without network, disk or
//! clipboard access.
//!
//! # Traits
//!
//! - [`HttpClient`] - JSON POST requests
//! - [`SettingsProvider`] - User-scoped settings storage (holds the API key)
//! - [`ClipboardProvider`] - System clipboard writes

pub mod clipboard;
pub mod http;
pub mod settings;

pub use clipboard::{ClipboardError, ClipboardProvider};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use settings::{SettingsError, SettingsProvider};
