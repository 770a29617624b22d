/// Integration tests for the gateway HTTP API
///
/// The router is driven in process with `tower::ServiceExt::oneshot`; the crew
/// is replaced by a stub runner so no model provider is involved.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use crew_relay::agents::TaskRunner;
use crew_relay::{create_router, AppError, AppResult, AppState};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Returns a fixed outcome and records every text it was asked to run
struct StubRunner {
    outcome: fn() -> AppResult<String>,
    calls: Mutex<Vec<String>>,
}

impl StubRunner {
    fn new(outcome: fn() -> AppResult<String>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskRunner for StubRunner {
    async fn run(&self, text: &str) -> AppResult<String> {
        self.calls.lock().unwrap().push(text.to_string());
        (self.outcome)()
    }
}

fn app(runner: Arc<StubRunner>) -> axum::Router {
    create_router(AppState::new(runner))
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_task(path: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let runner = StubRunner::new(|| Ok(String::new()));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, body) = send(app(runner.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_submit_task_success() {
    let runner = StubRunner::new(|| Ok("This is a mock result.".to_string()));

    let (status, body) = send(
        app(runner.clone()),
        post_task("/tasks/", json!({"user_id": 123, "text": "Analyze this text"})),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(runner.calls(), vec!["Analyze this text".to_string()]);
    assert_eq!(body["task_id"], "crew_task_finished");
    assert_eq!(body["status"], "received");
    assert!(body["message"].as_str().unwrap().contains("mock result"));
}

#[tokio::test]
async fn test_submit_task_without_trailing_slash() {
    let runner = StubRunner::new(|| Ok("done".to_string()));

    let (status, _) = send(
        app(runner.clone()),
        post_task("/tasks", json!({"user_id": 1, "text": "hi"})),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(runner.calls().len(), 1);
}

#[tokio::test]
async fn test_submit_task_worker_exception() {
    let runner = StubRunner::new(|| Err(AppError::Execution("Worker failed!".to_string())));

    let (status, body) = send(
        app(runner.clone()),
        post_task("/tasks/", json!({"user_id": 456, "text": "This one will fail"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("An error occurred while processing the task in the worker"));
    assert!(!detail.contains("Worker failed!"));
    assert!(!body.to_string().contains("Worker failed!"));
}

#[tokio::test]
async fn test_configuration_error_is_also_a_500() {
    let runner = StubRunner::new(|| {
        Err(AppError::Configuration("OPENAI_API_KEY is not set. Cannot run the crew.".to_string()))
    });

    let (status, body) = send(
        app(runner),
        post_task("/tasks/", json!({"user_id": 7, "text": "anything"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_empty_text_is_forwarded() {
    let runner = StubRunner::new(|| Ok("nothing to analyze".to_string()));

    let (status, _) = send(
        app(runner.clone()),
        post_task("/tasks/", json!({"user_id": 9, "text": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(runner.calls(), vec![String::new()]);
}

#[tokio::test]
async fn test_non_integer_user_id_is_rejected() {
    let runner = StubRunner::new(|| Ok("unreachable".to_string()));

    let (status, _) = send(
        app(runner.clone()),
        post_task("/tasks/", json!({"user_id": "abc", "text": "hello"})),
    )
    .await;

    assert!(status.is_client_error());
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_missing_text_is_rejected() {
    let runner = StubRunner::new(|| Ok("unreachable".to_string()));

    let (status, _) = send(app(runner.clone()), post_task("/tasks/", json!({"user_id": 1}))).await;

    assert!(status.is_client_error());
    assert!(runner.calls().is_empty());
}
