//! Generation against a real HTTP server (wiremock) through the reqwest
//! adapter.

use std::sync::Arc;
use std::time::Duration;

use kakomon::adapters::{InMemorySettings, ReqwestHttpClient};
use kakomon::workflow::{GenerationClient, GenerationState, GENERATE_PATH, GENERIC_FAILURE};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, timeout: Duration) -> GenerationClient {
    let http = ReqwestHttpClient::with_timeout(timeout).unwrap();
    GenerationClient::new(
        Arc::new(http),
        Arc::new(InMemorySettings::with_api_key("sk-wire")),
        format!("{}{}", server.uri(), GENERATE_PATH),
    )
}

#[tokio::test]
async fn test_posts_exam_content_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "examContent": "Solve x²-5x+6=0",
            "apiKey": "sk-wire"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "content": "Solve x²-7x+12=0" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client(&server, Duration::from_secs(5));
    let state = client.generate("Solve x²-5x+6=0").await.unwrap();

    assert_eq!(
        state,
        &GenerationState::Succeeded {
            items: vec!["Solve x²-7x+12=0".into()]
        }
    );
}

#[tokio::test]
async fn test_server_error_is_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "error": "OpenAI quota exceeded" })),
        )
        .mount(&server)
        .await;

    let mut client = client(&server, Duration::from_secs(5));
    let state = client.generate("q").await.unwrap();
    assert_eq!(
        state,
        &GenerationState::Failed {
            reason: GENERIC_FAILURE.to_string()
        }
    );
}

#[tokio::test]
async fn test_timeout_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "content": "late" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut client = client(&server, Duration::from_millis(50));
    let state = client.generate("q").await.unwrap();
    assert!(matches!(state, GenerationState::Failed { .. }));
}
