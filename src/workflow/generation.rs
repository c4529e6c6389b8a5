//! Generation client: single-flight requests to the similar-question endpoint.
//!
//! The client is a small state machine:
//!
//! ```text
//! Idle -> Requesting -> { Succeeded | Failed }
//!            ^                   |
//!            +------ begin ------+
//! ```
//!
//! [`GenerationClient::begin`] runs every precondition check and moves to
//! `Requesting`, returning a [`PendingGeneration`] that owns the request.
//! The pending request can be awaited inline or spawned onto the runtime;
//! its [`GenerationOutcome`] is folded back in with
//! [`GenerationClient::settle`]. While a request is in flight every other
//! `begin` fails with [`WorkflowError::Busy`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WorkflowError, WorkflowResult};
use crate::traits::{Headers, HttpClient, HttpError, SettingsProvider};

/// Path of the generation endpoint under the API base URL.
pub const GENERATE_PATH: &str = "/api/generate-similar";

/// Reason shown for every post-dispatch failure.
pub const GENERIC_FAILURE: &str =
    "Failed to generate a similar question. Check your API key in settings.";

/// Body of a generation request.
#[derive(Clone, Serialize)]
pub struct GenerationRequest {
    #[serde(rename = "examContent")]
    pub exam_content: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

impl std::fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("exam_content", &self.exam_content)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    content: Option<String>,
}

/// Where the client currently is in the request lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Requesting {
        request_id: Uuid,
    },
    Succeeded {
        items: Vec<String>,
    },
    Failed {
        reason: String,
    },
}

impl GenerationState {
    pub fn is_requesting(&self) -> bool {
        matches!(self, GenerationState::Requesting { .. })
    }
}

/// Result of one dispatched request, tagged with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub request_id: Uuid,
    /// Generated text, or the user-facing failure reason.
    pub result: Result<String, String>,
}

/// A request that passed its preconditions and has not been sent yet.
pub struct PendingGeneration {
    request_id: Uuid,
    http: Arc<dyn HttpClient>,
    endpoint: String,
    request: GenerationRequest,
}

impl std::fmt::Debug for PendingGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingGeneration")
            .field("request_id", &self.request_id)
            .field("endpoint", &self.endpoint)
            .field("request", &self.request)
            .finish()
    }
}

impl PendingGeneration {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Send the request and map the response to an outcome.
    pub async fn dispatch(self) -> GenerationOutcome {
        let result = self.send().await.map_err(|detail| {
            tracing::error!(
                request = %self.request_id,
                endpoint = %self.endpoint,
                "generation failed: {}",
                detail
            );
            GENERIC_FAILURE.to_string()
        });
        GenerationOutcome {
            request_id: self.request_id,
            result,
        }
    }

    // Err carries log-only detail.
    async fn send(&self) -> Result<String, String> {
        let body = serde_json::to_string(&self.request).map_err(|e| e.to_string())?;
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::info!(
            request = %self.request_id,
            chars = self.request.exam_content.chars().count(),
            "dispatching generation request"
        );
        let response = self
            .http
            .post(&self.endpoint, &body, &headers)
            .await
            .map_err(|e: HttpError| e.to_string())?;

        if !response.is_success() {
            return Err(format!(
                "status {}: {}",
                response.status,
                response.body_snippet(200)
            ));
        }

        let parsed: GenerationResponse = response
            .json()
            .map_err(|e| format!("invalid response body: {}", e))?;
        let content = parsed.content.unwrap_or_default();
        tracing::info!(request = %self.request_id, chars = content.chars().count(), "generation succeeded");
        Ok(content)
    }
}

/// Issues generation requests and owns the [`GenerationState`].
pub struct GenerationClient {
    http: Arc<dyn HttpClient>,
    settings: Arc<dyn SettingsProvider>,
    endpoint: String,
    state: GenerationState,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("endpoint", &self.endpoint)
            .field("state", &self.state)
            .finish()
    }
}

impl GenerationClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        settings: Arc<dyn SettingsProvider>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            settings,
            endpoint: endpoint.into(),
            state: GenerationState::Idle,
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check preconditions and move to `Requesting`.
    ///
    /// The credential is read from the settings store on every call. None of
    /// the failure paths touch the network or the current state.
    pub async fn begin(&mut self, source_text: &str) -> WorkflowResult<PendingGeneration> {
        if self.state.is_requesting() {
            return Err(WorkflowError::Busy);
        }
        if source_text.trim().is_empty() {
            return Err(WorkflowError::EmptyInput);
        }

        let api_key = match self.settings.api_key().await {
            Ok(Some(key)) => key,
            Ok(None) => return Err(WorkflowError::MissingCredential),
            Err(e) => {
                tracing::warn!("failed to read settings: {}", e);
                return Err(WorkflowError::MissingCredential);
            }
        };

        let request_id = Uuid::new_v4();
        self.state = GenerationState::Requesting { request_id };
        Ok(PendingGeneration {
            request_id,
            http: Arc::clone(&self.http),
            endpoint: self.endpoint.clone(),
            request: GenerationRequest {
                exam_content: source_text.to_string(),
                api_key,
            },
        })
    }

    /// Apply an outcome. Returns false if it belongs to a request that is no
    /// longer in flight.
    pub fn settle(&mut self, outcome: GenerationOutcome) -> bool {
        match &self.state {
            GenerationState::Requesting { request_id } if *request_id == outcome.request_id => {}
            _ => {
                tracing::debug!(request = %outcome.request_id, "ignoring stale generation outcome");
                return false;
            }
        }

        self.state = match outcome.result {
            Ok(content) => GenerationState::Succeeded {
                items: vec![content],
            },
            Err(reason) => GenerationState::Failed { reason },
        };
        true
    }

    /// Run one request to completion.
    pub async fn generate(&mut self, source_text: &str) -> WorkflowResult<&GenerationState> {
        let pending = self.begin(source_text).await?;
        let outcome = pending.dispatch().await;
        self.settle(outcome);
        Ok(&self.state)
    }

    /// Back to `Idle`, dropping any finished result.
    ///
    /// An in-flight request is left alone; its outcome will settle normally.
    pub fn reset(&mut self) {
        if !self.state.is_requesting() {
            self.state = GenerationState::Idle;
        }
    }
}
