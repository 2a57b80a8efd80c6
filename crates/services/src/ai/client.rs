use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use prep_core::model::UserPreferences;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AiError;
use crate::preferences_service::PreferencesService;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Anything that turns a prompt into model text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `AiError` when generation is unavailable or fails.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AiConfig {
    /// Reads `PREP_AI_API_KEY`, `PREP_AI_BASE_URL` and `PREP_AI_MODEL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            env::var("PREP_AI_API_KEY").ok(),
            env::var("PREP_AI_BASE_URL").ok(),
            env::var("PREP_AI_MODEL").ok(),
        )
    }

    /// Builds a config when a non-blank key is present, defaulting the rest.
    #[must_use]
    pub fn from_parts(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Option<Self> {
        let api_key = non_blank(api_key)?;
        Some(Self {
            base_url: non_blank(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_key,
            model: non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.into()),
        })
    }

    /// Stored preferences win over environment values, field by field.
    #[must_use]
    pub fn merged(env: Option<&AiConfig>, preferences: &UserPreferences) -> Option<Self> {
        let pick = |pref: Option<&str>, fallback: Option<&String>| {
            pref.map(ToString::to_string).or_else(|| fallback.cloned())
        };
        Self::from_parts(
            pick(preferences.api_key(), env.map(|c| &c.api_key)),
            pick(preferences.api_base_url(), env.map(|c| &c.base_url)),
            pick(preferences.api_model(), env.map(|c| &c.model)),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// OpenAI-compatible chat-completions client.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    env_config: Option<AiConfig>,
    preferences: Option<Arc<PreferencesService>>,
}

impl AiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AiConfig>) -> Self {
        Self {
            client: Client::new(),
            env_config: config,
            preferences: None,
        }
    }

    /// Resolve credentials from stored preferences on every request.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Arc<PreferencesService>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    async fn resolve_config(&self) -> Option<AiConfig> {
        match &self.preferences {
            Some(service) => {
                let prefs = service.load().await;
                AiConfig::merged(self.env_config.as_ref(), &prefs)
            }
            None => self.env_config.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for AiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let config = self.resolve_config().await.ok_or(AiError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.7,
        };

        log::debug!("requesting completion from {} ({})", url, config.model);
        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("completion request failed with {}", response.status());
            return Err(AiError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AiError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
