mod common;

use common::mock_service::{MockGenerationServer, MockResponse};
use std::sync::Arc;
use textgen_tui::config::ServiceConfig;
use textgen_tui::controller::FormController;
use textgen_tui::generation::{
    GenerationRequest, GenerationResult, GenerationService, HttpGenerationService, ServiceError,
};
use textgen_tui::ui::form::{FormIntent, FormState};

fn service_for(server: &MockGenerationServer, api_key: Option<&str>) -> HttpGenerationService {
    let config = ServiceConfig {
        base_url: server.base_url(),
        generate_path: "/generate".to_string(),
        api_key: api_key.map(str::to_string),
    };
    HttpGenerationService::new(&config).expect("client builds")
}

#[tokio::test]
async fn posts_json_body_to_generate_path() {
    let server = MockGenerationServer::start().await;
    server.enqueue(MockResponse::json(r#"{"Ok": "hello"}"#)).await;
    let service = service_for(&server, None);

    let result = service
        .generate(GenerationRequest::new("What is Rust?", 25, 0.4))
        .await
        .unwrap();
    assert_eq!(
        result,
        GenerationResult::Success {
            text: "hello".into()
        }
    );

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/generate");
    let body = requests[0].json();
    assert_eq!(body["prompt"], "What is Rust?");
    assert_eq!(body["num_tokens"], 25);
    assert!(body["num_tokens"].is_u64());
    assert_eq!(body["temperature"], 0.4);
    assert!(requests[0].header("authorization").is_none());
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let server = MockGenerationServer::start().await;
    server.enqueue(MockResponse::json(r#"{"Ok": ""}"#)).await;
    let service = service_for(&server, Some("secret"));

    service
        .generate(GenerationRequest::new("", 1, 0.0))
        .await
        .unwrap();

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), Some("Bearer secret"));
}

#[tokio::test]
async fn decodes_err_payload_as_domain_failure() {
    let server = MockGenerationServer::start().await;
    server
        .enqueue(MockResponse::json(r#"{"Err": "Inference failed: out of memory"}"#))
        .await;
    let service = service_for(&server, None);

    let result = service
        .generate(GenerationRequest::new("x", 10, 0.2))
        .await
        .unwrap();
    assert_eq!(
        result,
        GenerationResult::Failure {
            message: "Inference failed: out of memory".into()
        }
    );
}

#[tokio::test]
async fn untagged_payload_is_unrecognized() {
    let server = MockGenerationServer::start().await;
    server
        .enqueue(MockResponse::json(r#"{"text": "hello"}"#))
        .await;
    let service = service_for(&server, None);

    let result = service
        .generate(GenerationRequest::new("x", 10, 0.2))
        .await
        .unwrap();
    assert_eq!(result, GenerationResult::Unrecognized);
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
    let server = MockGenerationServer::start().await;
    server
        .enqueue(MockResponse::status(503, "model not loaded"))
        .await;
    let service = service_for(&server, None);

    let err = service
        .generate(GenerationRequest::new("x", 10, 0.2))
        .await
        .unwrap_err();
    match err {
        ServiceError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "model not loaded");
        }
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let server = MockGenerationServer::start().await;
    server.enqueue(MockResponse::json("not json")).await;
    let service = service_for(&server, None);

    let err = service
        .generate(GenerationRequest::new("x", 10, 0.2))
        .await
        .unwrap_err();
    match &err {
        ServiceError::Decode(json_err) => assert!(json_err.is_syntax()),
        other => panic!("expected Decode, got {:?}", other),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn unreachable_service_is_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = ServiceConfig {
        base_url: format!("http://127.0.0.1:{}", port),
        ..ServiceConfig::default()
    };
    let service = HttpGenerationService::new(&config).unwrap();

    let err = service
        .generate(GenerationRequest::new("x", 10, 0.2))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Connection { .. }));
}

#[tokio::test]
async fn form_round_trip_over_http() {
    let server = MockGenerationServer::start().await;
    server
        .enqueue(MockResponse::json(r#"{"Err": "rate limited"}"#))
        .await;
    let service = Arc::new(service_for(&server, None));
    let mut controller = FormController::new(FormState::default(), service);
    controller.dispatch(FormIntent::SetPrompt("hi".into()));

    controller.submit().await;

    assert_eq!(controller.state().result_text, "Error: rate limited");
    assert!(!controller.state().is_submitting);
    let body = server.captured_requests().await[0].json();
    assert_eq!(body["num_tokens"], 10);
    assert_eq!(body["temperature"], 0.2);
}
