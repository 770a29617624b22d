// OpenAI chat-completions adapter
// Also used for every OpenAI-compatible endpoint (Groq, OpenRouter, local gateways)
// API Reference: https://platform.openai.com/docs/api-reference/chat/create

use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

pub struct OpenAIAdapter {
    client: Client,
    api_key: String,
    api_base: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl OpenAIAdapter {
    pub fn new(api_key: &str) -> Self {
        Self::new_with_api_base(api_key, OPENAI_API_BASE)
    }

    pub fn new_with_api_base(api_key: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    /// Provider's own explanation of a failed call: `error.message` when the
    /// body follows the OpenAI error shape, otherwise the raw body
    fn error_message(body: &str) -> Option<String> {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            return Some(parsed.error.message);
        }
        let body = body.trim();
        (!body.is_empty()).then(|| body.to_string())
    }

    fn build_body<'a>(request: &'a LLMRequest) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = request.system_instruction.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.extend(request.messages.iter().map(|m| ChatMessage {
            role: m.role.as_str(),
            content: m.content.as_str(),
        }));

        ChatRequest {
            model: &request.model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl LLMAdapter for OpenAIAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let url = self.completions_url();
        debug!(model = %request.model, url = %url, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "LLM provider rejected the request");
            return Err(AppError::Rejected {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&response.text().await?)?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Unexpected("LLM response contained no choices".to_string()))?;

        let usage = parsed
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(LLMResponse {
            content: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LLMMessage;

    fn request() -> LLMRequest {
        LLMRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![LLMMessage::user("Summarize this")],
            max_tokens: None,
            temperature: Some(0.7),
            system_instruction: Some("You are terse.".to_string()),
        }
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let adapter = OpenAIAdapter::new_with_api_base("key", "http://localhost:1234/v1/");
        assert_eq!(adapter.completions_url(), "http://localhost:1234/v1/chat/completions");
        assert_eq!(
            OpenAIAdapter::new("key").completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_system_instruction_goes_first() {
        let request = request();
        let body = serde_json::to_value(OpenAIAdapter::build_body(&request)).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are terse.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_chat_completion_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "choices": [{
                        "message": {"role": "assistant", "content": "Short summary"},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let adapter = OpenAIAdapter::new_with_api_base("test-key", &server.url());
        let response = adapter.create_chat_completion(&request()).await.unwrap();

        assert_eq!(response.content, "Short summary");
        assert_eq!(response.usage.total_tokens, 15);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_maps_to_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": {"message": "rate limited"}}"#)
            .create_async()
            .await;

        let adapter = OpenAIAdapter::new_with_api_base("test-key", &server.url());
        let err = adapter.create_chat_completion(&request()).await.unwrap_err();
        match err {
            AppError::Rejected { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message.as_deref(), Some("rate limited"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            OpenAIAdapter::error_message(r#"{"error": {"message": "LiteLLM is down", "type": "server_error"}}"#),
            Some("LiteLLM is down".to_string())
        );
        assert_eq!(
            OpenAIAdapter::error_message("Bad Gateway\n"),
            Some("Bad Gateway".to_string())
        );
        assert_eq!(OpenAIAdapter::error_message("   "), None);
    }
}
