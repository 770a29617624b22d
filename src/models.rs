use crate::agents::TaskRunner;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Placeholder id returned for every processed task
pub const FINISHED_TASK_ID: &str = "crew_task_finished";

/// Detail returned to callers when the pipeline fails
pub const WORKER_FAILURE_DETAIL: &str = "An error occurred while processing the task in the worker.";

#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<dyn TaskRunner>,
}

impl AppState {
    pub fn new(runner: Arc<dyn TaskRunner>) -> Self {
        Self { runner }
    }
}

/// Payload the chat relay posts to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub user_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReceipt {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl TaskReceipt {
    pub fn finished(result: &str) -> Self {
        Self {
            task_id: FINISHED_TASK_ID.to_string(),
            status: "received".to_string(),
            message: format!("Task processed successfully. Result: {}", result),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
