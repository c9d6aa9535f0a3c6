//! AI provider port.
//!
//! Abstracts the generative backend behind a streaming completion call so
//! the chat flow never couples to a specific vendor API.

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Boxed stream of completion chunks.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, AIError>> + Send>>;

/// Port for generative AI interactions.
///
/// Implementations translate between the provider-specific API and our
/// request/chunk types. The stream is finite and not restartable once
/// consumed; chunk order matches emission order.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a streaming completion.
    ///
    /// Returns a stream of chunks as they arrive from the provider.
    async fn stream_complete(&self, request: CompletionRequest) -> Result<ChunkStream, AIError>;
}

/// Request for AI completion.
///
/// The prompt is pre-assembled by the caller (persona, history, retrieval
/// context, question) into a single flattened string.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Fully assembled prompt text.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_output_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Creates a request with no generation limits.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens: None,
            temperature: None,
        }
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit the output token limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
    /// An error occurred.
    Error,
}

/// Streaming chunk from AI completion.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    /// New content in this chunk.
    pub delta: String,
    /// If present, generation is complete.
    pub finish_reason: Option<FinishReason>,
}

impl StreamChunk {
    /// Creates a content chunk.
    pub fn content(delta: impl Into<String>) -> Self {
        Self {
            delta: delta.into(),
            finish_reason: None,
        }
    }

    /// Creates a final chunk.
    pub fn final_chunk(finish_reason: FinishReason) -> Self {
        Self {
            delta: String::new(),
            finish_reason: Some(finish_reason),
        }
    }

    /// Returns true if this is the final chunk.
    pub fn is_final(&self) -> bool {
        self.finish_reason.is_some()
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AIError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new("hello")
            .with_max_output_tokens(100)
            .with_temperature(0.7);

        assert_eq!(request.prompt, "hello");
        assert_eq!(request.max_output_tokens, Some(100));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[test]
    fn stream_chunk_content_is_not_final() {
        let chunk = StreamChunk::content("Hello");
        assert!(!chunk.is_final());
        assert_eq!(chunk.delta, "Hello");
    }

    #[test]
    fn stream_chunk_final_has_reason() {
        let chunk = StreamChunk::final_chunk(FinishReason::Stop);
        assert!(chunk.is_final());
        assert_eq!(chunk.delta, "");
        assert_eq!(chunk.finish_reason, Some(FinishReason::Stop));
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
    }
}
