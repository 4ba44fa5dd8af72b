use serde::{Deserialize, Serialize};
use std::env;

/// Connection settings for the external chat service. Built once at process
/// start and passed into the orchestrator explicitly; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
            timeout_secs: 120,
        }
    }
}

impl ChatConfig {
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("OLLAMA_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(model) = env::var("OLLAMA_MODEL") {
            config.model = model;
        }

        if let Ok(timeout) = env::var("LOGSIFT_CHAT_TIMEOUT") {
            config.timeout_secs = timeout.parse()?;
        }

        Ok(config)
    }
}
