//! Elasticsearch-backed travel search.
//!
//! Speaks the `_search` JSON API directly over HTTP: a multi_match keyword
//! query over the catalog's text fields, boosted toward names. Vector
//! scoring is the index's concern and not reproduced here.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::travel::TravelRecord;
use crate::ports::{SearchError, TravelSearch};

/// Configuration for the Elasticsearch adapter.
#[derive(Debug, Clone)]
pub struct ElasticsearchConfig {
    /// Cluster URL, e.g. "http://localhost:9200".
    pub url: String,
    /// Optional API key sent as an `Authorization: ApiKey` header.
    pub api_key: Option<String>,
    /// Index to query.
    pub index: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ElasticsearchConfig {
    pub fn new(url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            index: index.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Travel search over an Elasticsearch index.
pub struct ElasticsearchSearch {
    config: ElasticsearchConfig,
    client: Client,
}

impl ElasticsearchSearch {
    pub fn new(config: ElasticsearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::unavailable(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!(
            "{}/{}/_search",
            self.config.url.trim_end_matches('/'),
            self.config.index
        )
    }
}

#[async_trait]
impl TravelSearch for ElasticsearchSearch {
    async fn search(&self, query: &str, size: usize) -> Result<Vec<TravelRecord>, SearchError> {
        let body = json!({
            "size": size,
            "query": {
                "multi_match": {
                    "query": query,
                    "fields": ["name^3", "description^2", "highlights", "categories"],
                    "type": "best_fields"
                }
            }
        });

        let mut request = self.client.post(self.search_url()).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.header("Authorization", format!("ApiKey {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SearchError::unavailable(format!(
                "search returned {}: {}",
                status, error_body
            )));
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::parse(format!("Failed to parse search response: {}", e)))?;

        Ok(search_response
            .hits
            .hits
            .into_iter()
            .map(|hit| hit.source.into_record())
            .collect())
    }
}

// ----- Elasticsearch response types -----

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Hits,
}

#[derive(Debug, Default, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: CatalogDocument,
}

/// Catalog document as stored in the index, with the nested location
/// object flattened into the domain record.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    #[serde(default)]
    location: Location,
    #[serde(default)]
    description: String,
    price_range: Option<String>,
    rating: Option<f32>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    highlights: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Location {
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
}

impl CatalogDocument {
    fn into_record(self) -> TravelRecord {
        TravelRecord {
            name: self.name,
            record_type: self.record_type,
            city: self.location.city,
            country: self.location.country,
            description: self.description,
            price_range: self.price_range,
            rating: self.rating,
            categories: self.categories,
            highlights: self.highlights,
        }
    }
}
