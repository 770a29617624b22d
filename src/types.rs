// Type definitions shared across the relay, the gateway and the pipeline

#[derive(Debug, Clone)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<LLMMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub system_instruction: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LLMMessage {
    pub role: String, // "user", "assistant", "system"
    pub content: String,
}

impl LLMMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub finish_reason: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Every failure a hop can report. Each hop translates what it receives into
/// one of these kinds and never retries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Upstream rejected the request with status {status}{}", detail_suffix(.message))]
    Rejected { status: u16, message: Option<String> },

    #[error("An error occurred during crew execution: {0}")]
    Execution(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AppError::Unavailable(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Rejected {
                status: status.as_u16(),
                message: None,
            }
        } else {
            AppError::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unexpected(format!("Invalid JSON payload: {}", err))
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_carries_prefix_and_cause() {
        let err = AppError::Execution("LLM API is down".to_string());
        let text = err.to_string();
        assert!(text.starts_with("An error occurred during crew execution"));
        assert!(text.contains("LLM API is down"));
    }

    #[test]
    fn test_rejected_error_mentions_status() {
        let err = AppError::Rejected { status: 503, message: None };
        assert_eq!(err.to_string(), "Upstream rejected the request with status 503");
    }

    #[test]
    fn test_rejected_error_keeps_peer_message() {
        let err = AppError::Rejected {
            status: 500,
            message: Some("LiteLLM is down".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Upstream rejected the request with status 500: LiteLLM is down"
        );
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(LLMMessage::user("hi").role, "user");
        assert_eq!(LLMMessage::system("be brief").role, "system");
        assert_eq!(LLMMessage::assistant("ok").content, "ok");
    }
}
