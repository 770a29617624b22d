//! Chat Relay
//!
//! Forwards chat messages to the gateway's task intake and turns the HTTP
//! outcome into the reply the user sees. The chat platform glue lives in
//! [`telegram`]; everything here is platform independent.

pub mod telegram;

use crate::config::RelayConfig;
use crate::models::{TaskReceipt, TaskSubmission};
use crate::types::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, warn};

pub const WELCOME_REPLY: &str = "Welcome! I am your autonomous development assistant. Send me a task.";
pub const HELP_REPLY: &str =
    "Just send me a text message describing your task and I'll do my best to complete it.";
pub const ACCEPTED_REPLY: &str =
    "✅ Task received! The AI crew is on it. I'll get back to you with the result.";
pub const UNAVAILABLE_REPLY: &str =
    "❌ An error occurred: Could not connect to the API gateway. Please try again later.";
pub const UNEXPECTED_REPLY: &str = "❌ An unexpected error occurred. Please try again later.";

/// HTTP client for the gateway's task intake
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    tasks_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            tasks_url: format!("{}/tasks/", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &RelayConfig) -> AppResult<Self> {
        Self::new(&config.gateway_url, config.request_timeout())
    }

    pub fn tasks_url(&self) -> &str {
        &self.tasks_url
    }

    /// Submit a task. `Ok(None)` means the gateway accepted it but the body
    /// was not a receipt.
    pub async fn submit(&self, task: &TaskSubmission) -> AppResult<Option<TaskReceipt>> {
        let response = self
            .client
            .post(&self.tasks_url)
            .json(task)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        match serde_json::from_str::<TaskReceipt>(&body) {
            Ok(receipt) => Ok(Some(receipt)),
            Err(e) => {
                warn!(error = %e, "Gateway accepted the task but returned an unreadable body");
                Ok(None)
            }
        }
    }
}

/// Reply text for the outcome of a submission
pub fn reply_for(outcome: &AppResult<Option<TaskReceipt>>) -> String {
    match outcome {
        Ok(_) => ACCEPTED_REPLY.to_string(),
        Err(AppError::Unavailable(_)) => UNAVAILABLE_REPLY.to_string(),
        Err(AppError::Rejected { status, .. }) => format!(
            "❌ An error occurred: The API gateway responded with status {}. Please try again later.",
            status
        ),
        Err(_) => UNEXPECTED_REPLY.to_string(),
    }
}

/// Forward one chat message to the gateway and produce the reply text
pub async fn handle_message(client: &GatewayClient, user_id: i64, text: &str) -> String {
    info!(user_id, "Received message from user: {}", text);

    let task = TaskSubmission {
        user_id,
        text: text.to_string(),
    };
    let outcome = client.submit(&task).await;

    match &outcome {
        Ok(receipt) => info!(
            user_id,
            task_id = receipt.as_ref().map(|r| r.task_id.as_str()).unwrap_or("unknown"),
            "Task accepted by the gateway"
        ),
        Err(AppError::Unavailable(e)) => error!(user_id, error = %e, "Could not connect to the API gateway"),
        Err(AppError::Rejected { status, .. }) => {
            error!(user_id, status, "API gateway returned an error status")
        }
        Err(e) => error!(user_id, error = %e, "Unexpected error while submitting task"),
    }

    reply_for(&outcome)
}
