//! Outbound wire-format assertions
//!
//! Verifies the exact JSON the provider receives: message ordering,
//! verbatim field copies, and omission of unset optionals.

use askgate_rs::config::LlmConfig;
use askgate_rs::core::Question;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{chat_completion_body, test_llm_config, test_pipeline_with_config};

async fn sent_body(server: &MockServer) -> serde_json::Value {
    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

async fn mount_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("ok")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_user_only_payload() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let config = LlmConfig {
        model: "llama3.2".to_string(),
        temperature: 0.3,
        ..test_llm_config(&server.uri())
    };
    let pipeline = test_pipeline_with_config(config);
    pipeline
        .ask(&Question::new("What is 2+2?").unwrap())
        .await
        .expect("should succeed");

    let body = sent_body(&server).await;
    assert_eq!(body["model"], "llama3.2");
    assert_eq!(body["temperature"], 0.3);
    assert_eq!(
        body["messages"],
        serde_json::json!([{"role": "user", "content": "What is 2+2?"}])
    );
    assert!(body.get("max_tokens").is_none());
}

#[tokio::test]
async fn test_system_prompt_prepended() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let config = LlmConfig {
        system_prompt: Some("Answer briefly.".to_string()),
        ..test_llm_config(&server.uri())
    };
    let pipeline = test_pipeline_with_config(config);
    pipeline
        .ask(&Question::new("Hi").unwrap())
        .await
        .expect("should succeed");

    let body = sent_body(&server).await;
    let messages = body["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], "Answer briefly.");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "Hi");
}

#[tokio::test]
async fn test_max_tokens_sent_exactly_when_configured() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let config = LlmConfig {
        max_tokens: Some(1000),
        ..test_llm_config(&server.uri())
    };
    let pipeline = test_pipeline_with_config(config);
    pipeline
        .ask(&Question::new("Hi").unwrap())
        .await
        .expect("should succeed");

    let body = sent_body(&server).await;
    assert_eq!(body["max_tokens"], 1000);
}
