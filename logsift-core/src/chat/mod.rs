use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod ollama;

pub use ollama::OllamaClient;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid chat response: {0}")]
    InvalidResponse(String),
}

/// One role-tagged message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Capability contract for the external chat-completion service. The
/// orchestrator only depends on this trait, so tests substitute scripted
/// implementations returning canned text.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage], temperature: f32) -> Result<String, ChatError>;
}
