//! Gemini AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// Google Cloud project id (optional, used for Vertex-hosted models)
    pub project_id: Option<String>,

    /// Chat model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Embedding model name (reserved for hybrid search indexing)
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens to generate per reply
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    ///
    /// The demo can run with the mock provider, so a missing API key is
    /// allowed; a configured but empty model name is not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            project_id: None,
            model: default_model(),
            embedding_model: default_embedding_model(),
            timeout_secs: default_timeout(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-004".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_max_output_tokens() -> u32 {
    2048
}
