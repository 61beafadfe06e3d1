//! Pipeline behaviour against a stubbed provider
//!
//! Covers retry counts, short-circuiting on non-retryable kinds, and
//! error classification end to end through the transport.

use askgate_rs::core::{LlmError, Question};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{chat_completion_body, empty_choices_body, test_pipeline};

fn question() -> Question {
    Question::new("Hello").expect("valid question")
}

#[tokio::test]
async fn test_success_on_first_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("Echo: Hello")))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let answer = pipeline.ask(&question()).await.expect("should succeed");
    assert_eq!(answer.text, "Echo: Hello");
}

#[tokio::test]
async fn test_rate_limited_twice_then_success() {
    let server = MockServer::start().await;

    // Mounted first, consumed by the first two attempts.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("finally")))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let answer = pipeline.ask(&question()).await.expect("third attempt should succeed");
    assert_eq!(answer.text, "finally");
}

#[tokio::test]
async fn test_authentication_error_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let err = pipeline.ask(&question()).await.unwrap_err();
    assert!(matches!(err, LlmError::Authentication { status: 401 }));
}

#[tokio::test]
async fn test_provider_internal_retried_to_exhaustion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(3)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let err = pipeline.ask(&question()).await.unwrap_err();
    // The last attempt's error, not a synthetic "exhausted" wrapper.
    assert!(matches!(err, LlmError::ProviderInternal { status: 503 }));
}

#[tokio::test]
async fn test_unexpected_status_is_rejected_with_diagnostics() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such route"))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let err = pipeline.ask(&question()).await.unwrap_err();
    match err {
        LlmError::Rejected { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such route");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_success_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let err = pipeline.ask(&question()).await.unwrap_err();
    assert!(matches!(err, LlmError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_zero_choices_is_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_choices_body()))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let err = pipeline.ask(&question()).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyChoices));
}

#[tokio::test]
async fn test_empty_content_is_empty_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("")))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let err = pipeline.ask(&question()).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyContent));
}
