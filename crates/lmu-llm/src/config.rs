//! Runner configuration
//!
//! Selects the inference backend for the curriculum pipeline.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::mock::MockOllamaRunner;
use crate::ollama::{OllamaRunner, DEFAULT_OLLAMA_URL};
use crate::prompt::RuleSet;
use crate::provider::LlmProvider;

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Inference backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mock,
    Ollama,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "ollama" => Ok(Self::Ollama),
            other => Err(ConfigError::Invalid(format!("unknown backend '{other}'"))),
        }
    }
}

/// Runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Backend (env: LMU_BACKEND)
    pub backend: Backend,
    /// Model name (env: LMU_MODEL)
    pub model: String,
    /// Endpoint (env: OLLAMA_URL)
    pub base_url: String,
    /// Dispatch table for the mock backend (env: LMU_MOCK_RULES)
    pub mock_rules: RuleSet,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Mock,
            model: "mock".to_string(),
            base_url: "mock".to_string(),
            mock_rules: RuleSet::Full,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend: Backend = parse_var(&lookup, "LMU_BACKEND")?.unwrap_or_default();
        let default_url = match backend {
            Backend::Mock => "mock",
            Backend::Ollama => DEFAULT_OLLAMA_URL,
        };
        let mock_rules: RuleSet = parse_var(&lookup, "LMU_MOCK_RULES")?.unwrap_or_default();

        Ok(Self {
            backend,
            model: lookup("LMU_MODEL").unwrap_or_else(|| "mock".to_string()),
            base_url: lookup("OLLAMA_URL").unwrap_or_else(|| default_url.to_string()),
            mock_rules,
        })
    }
}

/// Parse `key` if set; blank values count as unset
fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = ConfigError>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse())
        .transpose()
}

/// Construct the configured runner
pub fn build_runner(config: &RunnerConfig) -> Box<dyn LlmProvider> {
    tracing::info!(backend = ?config.backend, model = %config.model, "building runner");
    match config.backend {
        Backend::Mock => Box::new(match config.mock_rules {
            RuleSet::Full => MockOllamaRunner::new(&config.model, &config.base_url),
            RuleSet::Reduced => MockOllamaRunner::reduced(&config.model, &config.base_url),
        }),
        Backend::Ollama => Box::new(OllamaRunner::with_url(&config.base_url, &config.model)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.backend, Backend::Mock);
        assert_eq!(config.model, "mock");
        assert_eq!(config.base_url, "mock");
        assert_eq!(config.mock_rules, RuleSet::Full);
    }

    #[test]
    fn test_ollama_defaults_url() {
        let config =
            RunnerConfig::from_lookup(lookup(&[("LMU_BACKEND", "Ollama"), ("LMU_MODEL", "llama3")]))
                .unwrap();
        assert_eq!(config.backend, Backend::Ollama);
        assert_eq!(config.base_url, DEFAULT_OLLAMA_URL);
        assert_eq!(config.model, "llama3");
    }

    #[test]
    fn test_invalid_values() {
        assert!(RunnerConfig::from_lookup(lookup(&[("LMU_BACKEND", "gpt")])).is_err());
        assert!(RunnerConfig::from_lookup(lookup(&[("LMU_MOCK_RULES", "half")])).is_err());
    }

    #[test]
    fn test_mock_rules_from_lookup() {
        for value in ["reduced", "Reduced", " REDUCED "] {
            let config = RunnerConfig::from_lookup(lookup(&[("LMU_MOCK_RULES", value)])).unwrap();
            assert_eq!(config.mock_rules, RuleSet::Reduced, "value: {value:?}");
        }
        let config = RunnerConfig::from_lookup(lookup(&[("LMU_MOCK_RULES", "Full")])).unwrap();
        assert_eq!(config.mock_rules, RuleSet::Full);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = RunnerConfig::from_lookup(lookup(&[
            ("LMU_BACKEND", ""),
            ("LMU_MOCK_RULES", "  "),
        ]))
        .unwrap();
        assert_eq!(config.backend, Backend::Mock);
        assert_eq!(config.mock_rules, RuleSet::Full);
    }

    #[tokio::test]
    async fn test_build_reduced_runner() {
        let config = RunnerConfig::from_lookup(lookup(&[("LMU_MOCK_RULES", "Reduced")])).unwrap();
        let runner = build_runner(&config);
        let out = runner.ask("Write grader.md").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["response"], "Mock Ollama response");
        assert_eq!(value["model"], "mock");
    }

    #[tokio::test]
    async fn test_build_mock_runner() {
        let config = RunnerConfig {
            model: "m1".to_string(),
            ..RunnerConfig::default()
        };
        let runner = build_runner(&config);
        assert_eq!(runner.name(), "mock-ollama");
        assert!(runner.is_available().await);
        let out = runner.ask("hello").await.unwrap();
        assert!(out.contains("\"model\":\"m1\""));
    }

    #[test]
    fn test_build_ollama_runner() {
        let config = RunnerConfig {
            backend: Backend::Ollama,
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            ..RunnerConfig::default()
        };
        assert_eq!(build_runner(&config).name(), "ollama");
    }
}
