//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSettingsProvider`] - File-based settings storage
//! - [`SystemClipboard`] - OS clipboard through arboard
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemorySettings`] - In-memory settings storage
//! - [`mock::MockClipboard`] - Records copies, can be told to fail

pub mod file_settings;
pub mod mock;
pub mod reqwest_http;
pub mod system_clipboard;

pub use file_settings::FileSettingsProvider;
pub use mock::{InMemorySettings, MockClipboard, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use system_clipboard::SystemClipboard;
