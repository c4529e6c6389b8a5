//! Mock re-exports and canned generation responses.

pub use kakomon::adapters::mock::{
    InMemorySettings, MockClipboard, MockHttpClient, MockResponse, RecordedRequest,
};
pub use kakomon::traits::{Headers, HttpClient, HttpError, Response};

/// `{"content": <text>}` with status 200.
pub fn generated(text: &str) -> MockResponse {
    MockResponse::json(200, &serde_json::json!({ "content": text }).to_string())
}

/// An error body with the given status.
pub fn server_error(status: u16, message: &str) -> MockResponse {
    MockResponse::json(status, &serde_json::json!({ "error": message }).to_string())
}

/// Transport-level failure.
pub fn connection_refused() -> MockResponse {
    MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
}
