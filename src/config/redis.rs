//! Redis configuration (conversation store)

use serde::Deserialize;

use super::error::ValidationError;

/// Redis configuration
///
/// Optional: the demo defaults to the in-memory conversation store when no
/// URL is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: Option<String>,

    /// Conversation TTL in seconds (0 = no expiry)
    #[serde(default = "default_conversation_ttl")]
    pub conversation_ttl_secs: u64,
}

impl RedisConfig {
    /// Check if Redis is configured
    pub fn is_configured(&self) -> bool {
        self.url.as_ref().is_some_and(|u| !u.is_empty())
    }

    /// Validate Redis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            if !url.is_empty() && !url.starts_with("redis://") && !url.starts_with("rediss://") {
                return Err(ValidationError::InvalidRedisUrl);
            }
        }
        Ok(())
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: None,
            conversation_ttl_secs: default_conversation_ttl(),
        }
    }
}

fn default_conversation_ttl() -> u64 {
    // 24 hours
    86_400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RedisConfig::default();
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
        assert_eq!(config.conversation_ttl_secs, 86_400);
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let config = RedisConfig {
            url: Some("http://localhost:6379".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_redis_url() {
        let config = RedisConfig {
            url: Some("redis://localhost:6379".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.is_configured());
    }
}
