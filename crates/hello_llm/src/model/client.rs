//! Model client for chat completion using OpenAI-compatible API

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};

/// Ollama's OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Model served by the local endpoint
pub const DEFAULT_MODEL: &str = "gpt-oss";

/// The local endpoint accepts any key, but the client requires one
pub const DEFAULT_API_KEY: &str = "ollama";

/// The single user message sent to the model
pub const GREETING_PROMPT: &str = "Hello!";

/// Configuration for the AI model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            model_name: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelConfig {
    /// Create a new ModelConfig with custom settings
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }
}

/// Build the fixed single-turn request.
///
/// The payload carries one user message containing [`GREETING_PROMPT`]
/// and no sampling parameters; nothing in it is derived from input.
pub fn build_request(model: &str) -> Result<CreateChatCompletionRequest> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages(vec![ChatCompletionRequestUserMessageArgs::default()
            .content(GREETING_PROMPT)
            .build()?
            .into()])
        .build()?;
    Ok(request)
}

/// Extract the reply text from the first choice of a response
fn extract_reply(response: CreateChatCompletionResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ModelError::EmptyResponse)?;
    choice.message.content.ok_or(ModelError::MissingContent)
}

/// Client for one-shot chat completions against an OpenAI-compatible endpoint
pub struct ModelClient {
    config: ModelConfig,
    client: Client<OpenAIConfig>,
}

impl ModelClient {
    /// Create a new ModelClient
    pub fn new(config: ModelConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.base_url)
            .with_api_key(&config.api_key);

        let client = Client::with_config(openai_config);

        Self { config, client }
    }

    /// Send the fixed greeting request and return the reply text
    pub async fn greet(&self) -> Result<String> {
        let request = build_request(&self.config.model_name)?;

        debug!(
            model = %self.config.model_name,
            base_url = %self.config.base_url,
            "sending chat completion request"
        );

        let response = self.client.chat().create(request).await?;
        let reply = extract_reply(response)?;

        debug!(chars = reply.len(), "received reply");

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_from(value: serde_json::Value) -> CreateChatCompletionResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_model_config_default() {
        let config = ModelConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model_name, "gpt-oss");
        assert_eq!(config.api_key, "ollama");
    }

    #[test]
    fn test_model_config_builder() {
        let config = ModelConfig::new("http://custom:8080/v1", "custom-model")
            .with_api_key("test-key");

        assert_eq!(config.base_url, "http://custom:8080/v1");
        assert_eq!(config.model_name, "custom-model");
        assert_eq!(config.api_key, "test-key");
    }

    #[test]
    fn test_request_payload_is_fixed() {
        let request = build_request(DEFAULT_MODEL).unwrap();
        let payload = serde_json::to_value(&request).unwrap();

        assert_eq!(
            payload,
            json!({
                "model": "gpt-oss",
                "messages": [{"role": "user", "content": "Hello!"}]
            })
        );
    }

    #[test]
    fn test_extract_reply() {
        let response = response_from(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-oss",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hi there!"},
                "finish_reason": "stop"
            }]
        }));

        assert_eq!(extract_reply(response).unwrap(), "Hi there!");
    }

    #[test]
    fn test_extract_reply_empty_choices() {
        let response = response_from(json!({
            "id": "chatcmpl-2",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-oss",
            "choices": []
        }));

        assert!(matches!(
            extract_reply(response),
            Err(ModelError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_reply_missing_content() {
        let response = response_from(json!({
            "id": "chatcmpl-3",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-oss",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant"},
                "finish_reason": "stop"
            }]
        }));

        assert!(matches!(
            extract_reply(response),
            Err(ModelError::MissingContent)
        ));
    }
}
