use async_trait::async_trait;
use crate::config::LLMConfig;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Configuration for LLM provider selection
pub struct LLMProviderConfig {
    pub name: String,
    pub api_key: String,
    /// Overrides the provider's default endpoint (self-hosted gateways, tests)
    pub api_base: Option<String>,
}

pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
}

impl LLM {
    pub fn new(provider: LLMProviderConfig) -> AppResult<Self> {
        let adapter: Box<dyn LLMAdapter> = match (provider.name.as_str(), provider.api_base.as_deref()) {
            ("openai" | "groq" | "openrouter", Some(base)) => Box::new(
                crate::llm::openai::OpenAIAdapter::new_with_api_base(&provider.api_key, base),
            ),
            ("openai", None) => Box::new(crate::llm::openai::OpenAIAdapter::new(&provider.api_key)),
            ("groq", None) => Box::new(crate::llm::groq::GroqAdapter::new(&provider.api_key)),
            ("openrouter", None) => {
                Box::new(crate::llm::openrouter::OpenRouterAdapter::new(&provider.api_key))
            }
            (other, _) => {
                return Err(AppError::Configuration(format!(
                    "Unsupported LLM provider: {}",
                    other
                )))
            }
        };

        Ok(Self {
            adapter,
            provider_name: provider.name,
        })
    }

    /// Build the client for the provider named in the configuration.
    /// Fails before any network traffic when the provider's key is missing.
    pub fn from_config(config: &LLMConfig) -> AppResult<Self> {
        let api_key = config.require_api_key()?;
        Self::new(LLMProviderConfig {
            name: config.provider.clone(),
            api_key: api_key.to_string(),
            api_base: config.api_base.clone(),
        })
    }

    pub fn with_adapter(provider_name: impl Into<String>, adapter: Box<dyn LLMAdapter>) -> Self {
        Self {
            adapter,
            provider_name: provider_name.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}
