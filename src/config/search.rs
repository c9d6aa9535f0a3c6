//! Search collaborator configuration (Elasticsearch)

use serde::Deserialize;

use super::error::ValidationError;

/// Search service configuration
///
/// The search collaborator is optional: when no URL is configured the
/// application falls back to the built-in static travel catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Elasticsearch base URL (e.g. https://my-cluster.es.io:9243)
    pub url: Option<String>,

    /// Elasticsearch API key
    pub api_key: Option<String>,

    /// Index name holding travel records
    #[serde(default = "default_index")]
    pub index: String,

    /// Result window size per query
    #[serde(default = "default_size")]
    pub size: u32,
}

impl SearchConfig {
    /// Check if an external search service is configured
    pub fn is_configured(&self) -> bool {
        self.url.as_ref().is_some_and(|u| !u.is_empty())
    }

    /// Validate search configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidSearchUrl);
            }
        }
        if self.size == 0 || self.size > 100 {
            return Err(ValidationError::InvalidSearchSize);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            index: default_index(),
            size: default_size(),
        }
    }
}

fn default_index() -> String {
    "travel-catalog".to_string()
}

fn default_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.index, "travel-catalog");
        assert_eq!(config.size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_configured() {
        let config = SearchConfig {
            url: Some("https://search.example.com".to_string()),
            size: 10,
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_validation_rejects_bad_scheme() {
        let config = SearchConfig {
            url: Some("ftp://search.example.com".to_string()),
            size: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_size() {
        let config = SearchConfig {
            size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_https() {
        let config = SearchConfig {
            url: Some("https://search.example.com".to_string()),
            size: 10,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
