//! Inference provider trait and common types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default generation budget used by the curriculum pipeline
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default sampling temperature used by the curriculum pipeline
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Errors from inference providers
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Provider not available")]
    NotAvailable,
}

/// A generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// Prompt text
    pub prompt: String,
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl LlmRequest {
    /// Create a request with the pipeline defaults
    pub fn simple(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Response from a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// The generated text
    pub content: String,
    /// Model used
    pub model: String,
    /// Tokens evaluated (if the backend reports it)
    pub tokens_used: Option<u32>,
    /// Time taken in milliseconds
    pub latency_ms: u64,
}

/// Trait for inference backends driven by the curriculum pipeline
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Check if the backend is reachable
    async fn is_available(&self) -> bool;

    /// Generate a completion
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Generate with a simple prompt (convenience method)
    async fn ask(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.complete(LlmRequest::simple(prompt)).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_request_defaults() {
        let req = LlmRequest::simple("hello");
        assert_eq!(req.prompt, "hello");
        assert_eq!(req.max_tokens, 1000);
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_request_builders() {
        let req = LlmRequest::simple("x")
            .with_max_tokens(64)
            .with_temperature(0.0);
        assert_eq!(req.max_tokens, 64);
        assert_eq!(req.temperature, 0.0);
    }

    #[test]
    fn test_error_display() {
        let err = LlmError::RequestFailed("Status: 500".to_string());
        assert_eq!(err.to_string(), "Request failed: Status: 500");
        assert_eq!(LlmError::NotAvailable.to_string(), "Provider not available");
    }
}
