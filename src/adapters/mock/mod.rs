//! Mock implementations for testing.
//!
//! These let the workflow run without network, file system or clipboard.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySettings`] - In-memory settings storage
//! - [`MockClipboard`] - Clipboard that records writes

pub mod clipboard;
pub mod http;
pub mod settings;

pub use clipboard::MockClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use settings::InMemorySettings;
