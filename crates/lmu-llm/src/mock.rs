//! Mock Ollama runner for exercising the curriculum pipeline offline

use async_trait::async_trait;
use serde::Serialize;
use std::time::Instant;

use crate::prompt::{PromptKind, RuleSet};
use crate::provider::{
    LlmError, LlmProvider, LlmRequest, LlmResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
use crate::responses;

/// A stand-in for [`crate::OllamaRunner`] that answers curriculum prompts
/// with fixed payloads.
///
/// Output depends only on the prompt and the configured model, so the same
/// prompt always yields byte-identical text.
#[derive(Debug, Clone)]
pub struct MockOllamaRunner {
    /// Reported model name
    model: String,
    /// Nominal endpoint; never contacted
    base_url: String,
    rules: RuleSet,
}

impl Default for MockOllamaRunner {
    fn default() -> Self {
        Self::new("mock", "mock")
    }
}

impl MockOllamaRunner {
    pub fn new(model: &str, base_url: &str) -> Self {
        Self {
            model: model.to_string(),
            base_url: base_url.to_string(),
            rules: RuleSet::Full,
        }
    }

    /// Responder without the expected-artifacts and grader branches.
    ///
    /// Those prompts fall through to the script or fallback answers.
    pub fn reduced(model: &str, base_url: &str) -> Self {
        Self {
            rules: RuleSet::Reduced,
            ..Self::new(model, base_url)
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rules
    }

    /// Which canned answer `prompt` selects
    pub fn classify(&self, prompt: &str) -> PromptKind {
        self.rules.classify(prompt)
    }

    /// Answer a prompt. `max_tokens` and `temperature` are accepted for
    /// parity with the live runner and ignored.
    pub fn generate(&self, prompt: &str, _max_tokens: u32, _temperature: f32) -> String {
        let kind = self.classify(prompt);
        tracing::debug!(model = %self.model, ?kind, "mock ollama dispatch");

        match kind {
            PromptKind::LessonPlan => to_json(&responses::lesson_plan()),
            PromptKind::Tasks => to_json(&responses::task_list()),
            PromptKind::Spec => responses::SPEC_MD.to_string(),
            PromptKind::ExpectedArtifacts => to_json(&responses::artifact_manifest()),
            PromptKind::Grader => responses::GRADER_MD.to_string(),
            PromptKind::Runner => responses::RUN_PY.to_string(),
            PromptKind::Unknown => to_json(&responses::fallback(&self.model)),
        }
    }

    /// [`generate`](Self::generate) with the pipeline's default settings
    pub fn generate_default(&self, prompt: &str) -> String {
        self.generate(prompt, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE)
    }

    pub fn verify_connectivity(&self) -> bool {
        true
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to encode canned payload");
        String::from("{}")
    })
}

#[async_trait]
impl LlmProvider for MockOllamaRunner {
    fn name(&self) -> &str {
        "mock-ollama"
    }

    async fn is_available(&self) -> bool {
        self.verify_connectivity()
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = Instant::now();
        let content = self.generate(&request.prompt, request.max_tokens, request.temperature);

        Ok(LlmResponse {
            content,
            model: self.model.clone(),
            tokens_used: None,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
