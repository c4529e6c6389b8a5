//! End-to-end generation through a session: preconditions, single flight,
//! response mapping and failure recovery.

mod common;

use common::*;
use kakomon::error::WorkflowError;
use kakomon::workflow::{
    GenerationState, PresentedQuestion, PresentedResult, SelectionField, GENERIC_FAILURE,
};

fn open(fx: &mut SessionFixture) {
    fx.session.select(SelectionField::Faculty, "sci").unwrap();
    fx.session.select(SelectionField::Department, "math").unwrap();
    fx.session.select(SelectionField::Subject, "calc").unwrap();
    fx.session.select(SelectionField::Professor, "suzuki").unwrap();
    fx.session.submit_selection().unwrap();
}

fn state(fx: &SessionFixture) -> GenerationState {
    fx.session.workspace().unwrap().generation().clone()
}

#[tokio::test]
async fn test_generation_unreachable_before_submit() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_default_response(generated("x"));

    assert!(matches!(
        fx.session.begin_generation().await,
        Err(WorkflowError::Validation)
    ));
    assert_eq!(fx.http.request_count(), 0);
}

#[tokio::test]
async fn test_blank_source_is_empty_input_without_network() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_default_response(generated("x"));
    open(&mut fx);

    for text in ["", "   "] {
        fx.session.set_typed(text).unwrap();
        assert!(matches!(
            fx.session.generate().await,
            Err(WorkflowError::EmptyInput)
        ));
    }
    assert_eq!(fx.http.request_count(), 0);
    assert_eq!(state(&fx), GenerationState::Idle);
}

#[tokio::test]
async fn test_missing_credential_without_network() {
    let mut fx = TestSessionBuilder::new().build();
    fx.http.set_default_response(generated("x"));
    open(&mut fx);
    fx.session.set_typed("Solve 2x = 4").unwrap();

    assert!(matches!(
        fx.session.generate().await,
        Err(WorkflowError::MissingCredential)
    ));
    assert_eq!(fx.http.request_count(), 0);
}

#[tokio::test]
async fn test_credential_read_at_generation_time() {
    let mut fx = TestSessionBuilder::new().build();
    fx.http.set_response(TEST_ENDPOINT, generated("ok"));
    open(&mut fx);
    fx.session.set_typed("q").unwrap();

    assert!(fx.session.generate().await.is_err());
    fx.settings.set_settings(Some(kakomon::settings::Settings::with_api_key("sk-late")));
    fx.session.generate().await.unwrap();

    let body = fx.http.get_requests()[0].json_body().unwrap();
    assert_eq!(body["apiKey"], "sk-late");
    assert_eq!(fx.settings.load_count(), 2);
}

#[tokio::test]
async fn test_success_yields_exactly_one_item() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_response(TEST_ENDPOINT, generated("2x+3=7"));
    open(&mut fx);
    fx.session.set_typed("Solve x+1=2").unwrap();

    fx.session.generate().await.unwrap();

    assert_eq!(
        fx.session.presented(),
        PresentedResult::Questions(vec![PresentedQuestion {
            label: "Similar question 1".into(),
            text: "2x+3=7".into(),
        }])
    );
}

#[tokio::test]
async fn test_empty_content_is_success_not_failure() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_response(TEST_ENDPOINT, generated(""));
    open(&mut fx);
    fx.session.set_typed("q").unwrap();

    fx.session.generate().await.unwrap();
    assert_eq!(
        state(&fx),
        GenerationState::Succeeded {
            items: vec![String::new()]
        }
    );
}

#[tokio::test]
async fn test_non_2xx_is_generic_failure_regardless_of_body() {
    for (status, body) in [
        (400, "Invalid API key sk-abc"),
        (500, "Traceback: openai.error.RateLimitError"),
    ] {
        let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
        fx.http.set_response(TEST_ENDPOINT, server_error(status, body));
        open(&mut fx);
        fx.session.set_typed("q").unwrap();

        fx.session.generate().await.unwrap();
        assert_eq!(
            state(&fx),
            GenerationState::Failed {
                reason: GENERIC_FAILURE.to_string()
            }
        );
    }
}

#[tokio::test]
async fn test_transport_failure_then_recovery() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_response(TEST_ENDPOINT, connection_refused());
    open(&mut fx);
    fx.session.set_typed("q").unwrap();

    fx.session.generate().await.unwrap();
    assert!(matches!(state(&fx), GenerationState::Failed { .. }));

    fx.http.set_response(TEST_ENDPOINT, generated("recovered"));
    fx.session.generate().await.unwrap();
    assert_eq!(
        state(&fx),
        GenerationState::Succeeded {
            items: vec!["recovered".into()]
        }
    );
}

#[tokio::test]
async fn test_second_request_while_requesting_is_busy() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_response(TEST_ENDPOINT, generated("first"));
    open(&mut fx);
    fx.session.set_typed("q").unwrap();

    let pending = fx.session.begin_generation().await.unwrap();
    assert!(matches!(
        fx.session.begin_generation().await,
        Err(WorkflowError::Busy)
    ));

    let outcome = tokio::spawn(pending.dispatch()).await.unwrap();
    assert!(fx.session.settle_generation(outcome));
    assert_eq!(
        state(&fx),
        GenerationState::Succeeded {
            items: vec!["first".into()]
        }
    );
    assert_eq!(fx.http.request_count(), 1);
}

#[tokio::test]
async fn test_imported_path_reference_is_not_generatable() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_default_response(generated("x"));
    fx.session.open_professor("tanaka");
    fx.session.import_exam(Some("tanaka-2022-final")).unwrap();

    assert!(matches!(
        fx.session.generate().await,
        Err(WorkflowError::EmptyInput)
    ));
    assert_eq!(fx.http.request_count(), 0);
}

#[tokio::test]
async fn test_back_and_resubmit_while_requesting_is_busy() {
    let mut fx = TestSessionBuilder::new().with_api_key("sk-test").build();
    fx.http.set_response(TEST_ENDPOINT, generated("first"));
    open(&mut fx);
    fx.session.set_typed("q").unwrap();
    let first = fx.session.begin_generation().await.unwrap();

    fx.session.back();
    open(&mut fx);
    fx.session.set_typed("q2").unwrap();

    assert!(matches!(
        fx.session.begin_generation().await,
        Err(WorkflowError::Busy)
    ));

    let outcome = first.dispatch().await;
    assert!(!fx.session.settle_generation(outcome));
    assert_eq!(fx.http.request_count(), 1);

    fx.session.generate().await.unwrap();
    assert_eq!(
        state(&fx),
        GenerationState::Succeeded {
            items: vec!["first".into()]
        }
    );
}
