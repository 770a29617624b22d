use crate::types::{AppError, AppResult};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub provider: String,
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub model: String,
    pub api_base: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

#[derive(Clone)]
pub struct RelayConfig {
    pub telegram_bot_token: Option<String>,
    pub gateway_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            server: ServerConfig {
                port: parse_or(&lookup, "PORT", 8000)?,
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            },
            llm: LLMConfig {
                provider: lookup("LLM_PROVIDER").unwrap_or_else(|| "openai".to_string()),
                openai_api_key: non_empty("OPENAI_API_KEY"),
                groq_api_key: non_empty("GROQ_API_KEY"),
                openrouter_api_key: non_empty("OPENROUTER_API_KEY"),
                model: lookup("OPENAI_MODEL_NAME").unwrap_or_else(|| "gpt-4o-mini".to_string()),
                api_base: non_empty("OPENAI_API_BASE"),
                temperature: parse_or(&lookup, "LLM_TEMPERATURE", 0.7)?,
                max_tokens: lookup("LLM_MAX_TOKENS")
                    .map(|raw| parse_value("LLM_MAX_TOKENS", &raw))
                    .transpose()?,
            },
            relay: RelayConfig {
                telegram_bot_token: non_empty("TELEGRAM_BOT_TOKEN"),
                gateway_url: lookup("API_GATEWAY_URL")
                    .unwrap_or_else(|| "http://api_gateway:8000".to_string()),
                request_timeout_secs: parse_or(&lookup, "GATEWAY_TIMEOUT_SECS", 30)?,
            },
        })
    }
}

impl LLMConfig {
    /// Name of the environment variable holding the key for the active provider
    pub fn api_key_var(&self) -> &'static str {
        match self.provider.as_str() {
            "groq" => "GROQ_API_KEY",
            "openrouter" => "OPENROUTER_API_KEY",
            _ => "OPENAI_API_KEY",
        }
    }

    pub fn active_api_key(&self) -> Option<&str> {
        let key = match self.provider.as_str() {
            "groq" => &self.groq_api_key,
            "openrouter" => &self.openrouter_api_key,
            _ => &self.openai_api_key,
        };
        key.as_deref()
    }

    pub fn require_api_key(&self) -> AppResult<&str> {
        self.active_api_key().ok_or_else(|| {
            AppError::Configuration(format!(
                "{} is not set. Cannot run the crew.",
                self.api_key_var()
            ))
        })
    }
}

impl RelayConfig {
    pub fn require_bot_token(&self) -> AppResult<&str> {
        self.telegram_bot_token.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "TELEGRAM_BOT_TOKEN is not set in the environment or .env file".to_string(),
            )
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Keys must never end up in logs
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("provider", &self.provider)
            .field("api_key_set", &self.active_api_key().is_some())
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("bot_token_set", &self.telegram_bot_token.is_some())
            .field("gateway_url", &self.gateway_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Configuration(format!("{} has an invalid value: {:?}", key, raw)))
}
