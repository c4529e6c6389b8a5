//! HTTP seam used by the generation client.
//!
//! The workflow sends exactly one kind of request, a JSON POST, so the trait
//! has a single method. A non-2xx reply is still `Ok`; mapping statuses to
//! outcomes is the caller's job.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Header name to value.
pub type Headers = HashMap<String, String>;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Lossy, length-capped body for log lines. Never shown to the user.
    pub fn body_snippet(&self, max_chars: usize) -> String {
        let text = String::from_utf8_lossy(&self.body);
        if text.chars().count() <= max_chars {
            return text.into_owned();
        }
        let mut snippet: String = text.chars().take(max_chars).collect();
        snippet.push('…');
        snippet
    }
}

/// Transport failures. Every variant ends a generation as `Failed`; the
/// variant only shapes the log line.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    /// The configured request timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// The response body could not be read.
    #[error("reading response body: {0}")]
    Body(String),
    #[error("http: {0}")]
    Other(String),
}

/// Sends JSON requests.
///
/// ```ignore
/// use kakomon::traits::{Headers, HttpClient};
///
/// let response = client
///     .post("http://localhost:3000/api/generate-similar", r#"{"examContent":"q","apiKey":"sk"}"#, &Headers::new())
///     .await?;
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `body` to `url` with `headers`.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_bounds() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(299, Bytes::new()).is_success());
        assert!(!Response::new(199, Bytes::new()).is_success());
        assert!(!Response::new(300, Bytes::new()).is_success());
        assert!(!Response::new(401, Bytes::new()).is_success());
    }

    #[test]
    fn test_json_generation_body() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Body {
            content: String,
        }

        let response = Response::new(200, Bytes::from(r#"{"content":"2x+3=7"}"#));
        let body: Body = response.json().unwrap();
        assert_eq!(body.content, "2x+3=7");
    }

    #[test]
    fn test_body_snippet_truncates() {
        let response = Response::new(500, Bytes::from("internal failure detail"));
        assert_eq!(response.body_snippet(8), "internal…");
        assert_eq!(response.body_snippet(100), "internal failure detail");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HttpError::Timeout("60s".into()).to_string(),
            "request timed out: 60s"
        );
        assert_eq!(
            HttpError::Body("truncated".into()).to_string(),
            "reading response body: truncated"
        );
    }
}
