//! Gemini provider - implementation of AIProvider for Google's Gemini API.
//!
//! Uses the `streamGenerateContent?alt=sse` endpoint. Each SSE `data:`
//! line carries a partial candidate; the final one carries a finish reason.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, ChunkStream, CompletionRequest, FinishReason, StreamChunk,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.0-flash-exp").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.0-flash-exp".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.config.base_url,
            self.config.model,
            self.config.api_key()
        )
    }

    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: request.max_output_tokens,
                temperature: request.temperature,
            },
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let gemini_request = self.to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps a non-2xx response to the matching error.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::RateLimited {
                retry_after_secs: 30,
            }),
            400 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn stream_complete(&self, request: CompletionRequest) -> Result<ChunkStream, AIError> {
        let response = self.send_request(&request).await?;
        let response = self.handle_response_status(response).await?;

        // Line-buffer the byte stream: SSE events can be split across
        // network chunks, so carry the trailing partial line forward.
        let stream = response
            .bytes_stream()
            .map(|chunk_result| {
                chunk_result.map_err(|e| AIError::network(format!("Stream error: {}", e)))
            })
            .scan(String::new(), |buffer, chunk_result| {
                let events = match chunk_result {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));
                        let mut complete = Vec::new();
                        while let Some(pos) = buffer.find('\n') {
                            let line = buffer[..pos].trim_end_matches('\r').to_string();
                            buffer.drain(..=pos);
                            complete.extend(parse_sse_line(&line));
                        }
                        complete
                    }
                    Err(e) => vec![Err(e)],
                };
                futures::future::ready(Some(events))
            })
            .flat_map(stream::iter);

        Ok(Box::pin(stream))
    }
}

fn map_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") => FinishReason::ContentFilter,
        Some("STOP") | None => FinishReason::Stop,
        Some(_) => FinishReason::Stop,
    }
}

/// Parses one SSE line into zero or more stream chunks.
fn parse_sse_line(line: &str) -> Vec<Result<StreamChunk, AIError>> {
    let Some(data) = line.strip_prefix("data: ") else {
        return Vec::new();
    };
    if data.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<GeminiResponse>(data) {
        Ok(response) => {
            let mut results = Vec::new();
            for candidate in response.candidates {
                let text: String = candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect();
                if !text.is_empty() {
                    results.push(Ok(StreamChunk::content(text)));
                }
                if let Some(reason) = candidate.finish_reason.as_deref() {
                    results.push(Ok(StreamChunk::final_chunk(map_finish_reason(Some(
                        reason,
                    )))));
                }
            }
            results
        }
        Err(e) => vec![Err(AIError::parse(format!(
            "Failed to parse SSE chunk: {}",
            e
        )))],
    }
}

// ----- Gemini API types -----

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default = "empty_content")]
    content: Content,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

fn empty_content() -> Content {
    Content { parts: Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sse_line_with_text_yields_content_chunk() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#;
        let chunks = parse_sse_line(line);

        assert_eq!(chunks.len(), 1);
        let chunk = chunks[0].as_ref().unwrap();
        assert_eq!(chunk.delta, "Hello");
        assert!(!chunk.is_final());
    }

    #[test]
    fn sse_line_with_finish_reason_yields_final_chunk() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"bye"}]},"finishReason":"STOP"}]}"#;
        let chunks = parse_sse_line(line);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].as_ref().unwrap().delta, "bye");
        let last = chunks[1].as_ref().unwrap();
        assert!(last.is_final());
        assert_eq!(last.finish_reason, Some(FinishReason::Stop));
    }

    #[test]
    fn non_data_lines_are_ignored() {
        assert!(parse_sse_line("").is_empty());
        assert!(parse_sse_line(": keep-alive").is_empty());
        assert!(parse_sse_line("event: message").is_empty());
    }

    #[test]
    fn malformed_data_yields_parse_error() {
        let chunks = parse_sse_line("data: {not json");
        assert_eq!(chunks.len(), 1);
        assert!(matches!(chunks[0], Err(AIError::Parse(_))));
    }

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(map_finish_reason(Some("STOP")), FinishReason::Stop);
        assert_eq!(map_finish_reason(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(
            map_finish_reason(Some("SAFETY")),
            FinishReason::ContentFilter
        );
        assert_eq!(map_finish_reason(None), FinishReason::Stop);
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
