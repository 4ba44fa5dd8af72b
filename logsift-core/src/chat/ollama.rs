use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::chat::{ChatError, ChatMessage, ChatProvider};
use crate::config::ChatConfig;

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

/// Client for an Ollama-style `/api/chat` endpoint.
pub struct OllamaClient {
    client: Client,
    config: ChatConfig,
}

impl OllamaClient {
    pub fn new(config: ChatConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait::async_trait]
impl ChatProvider for OllamaClient {
    async fn chat(&self, messages: &[ChatMessage], temperature: f32) -> Result<String, ChatError> {
        let url = format!("{}/api/chat", self.config.base_url.trim_end_matches('/'));
        let request = OllamaChatRequest {
            model: &self.config.model,
            messages,
            temperature,
            stream: false,
        };

        debug!("Sending {} messages to {}", messages.len(), url);
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let chat_response: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(chat_response.message.content)
    }
}
