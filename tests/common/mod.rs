//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::TestSessionBuilder;
//!
//! let fx = TestSessionBuilder::new().with_api_key("sk-test").build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use kakomon::app::App;
use kakomon::catalog::StaticCatalog;
use kakomon::workflow::Session;

/// Endpoint used by sessions built in tests.
pub const TEST_ENDPOINT: &str = "http://kakomon.test/api/generate-similar";

/// Minimal valid PDF header.
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n";

/// A session and handles to its test doubles.
pub struct SessionFixture {
    pub session: Session,
    pub http: MockHttpClient,
    pub settings: InMemorySettings,
    pub clipboard: MockClipboard,
}

/// Builder for sessions wired to mocks.
#[derive(Default)]
pub struct TestSessionBuilder {
    api_key: Option<String>,
    http: Option<MockHttpClient>,
}

impl TestSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> SessionFixture {
        let http = self.http.unwrap_or_default();
        let settings = match &self.api_key {
            Some(key) => InMemorySettings::with_api_key(key),
            None => InMemorySettings::new(),
        };
        let clipboard = MockClipboard::new();
        let session = Session::new(
            Arc::new(StaticCatalog::builtin()),
            Arc::new(http.clone()),
            Arc::new(settings.clone()),
            Arc::new(clipboard.clone()),
            TEST_ENDPOINT,
        );
        SessionFixture {
            session,
            http,
            settings,
            clipboard,
        }
    }

    pub fn build_app(self) -> (App, MockHttpClient, MockClipboard) {
        let fx = self.build();
        (App::new(fx.session), fx.http, fx.clipboard)
    }
}
