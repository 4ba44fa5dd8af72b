use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub port: u16,
    pub max_upload_size: usize,
    pub cors_origins: Vec<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            max_upload_size: 50 * 1024 * 1024, // 50MB
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl WebConfig {
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("LOGSIFT_PORT") {
            config.port = port.parse()?;
        }

        if let Ok(max_size) = env::var("LOGSIFT_MAX_UPLOAD_SIZE") {
            config.max_upload_size = max_size.parse()?;
        }

        if let Ok(origins) = env::var("CORS_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !origins.is_empty() {
                config.cors_origins = origins;
            }
        }

        Ok(config)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebConfig::default();
        assert_eq!(config.port, 8000);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_specific_origins_disable_wildcard() {
        let config = WebConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..WebConfig::default()
        };
        assert!(!config.allows_any_origin());
    }
}
