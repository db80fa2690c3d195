//! # LMU LLM
//!
//! Inference backends for the LMU curriculum runtime.
//!
//! ## Supported Backends
//!
//! | Runner | Type | Server Required |
//! |--------|------|-----------------|
//! | Ollama | Local | `ollama serve` |
//! | Mock | Testing | None |
//!
//! ## Quick Start
//!
//! ```rust
//! use lmu_llm::{MockOllamaRunner, PromptKind, TaskList};
//!
//! let runner = MockOllamaRunner::default();
//! assert!(runner.verify_connectivity());
//!
//! let prompt = "Please generate the tasks.json file for this lesson";
//! assert_eq!(runner.classify(prompt), PromptKind::Tasks);
//!
//! let tasks: TaskList = serde_json::from_str(&runner.generate(prompt, 1000, 0.7)).unwrap();
//! assert_eq!(tasks.tasks.len(), 3);
//! ```
//!
//! ## Choosing a backend from the environment
//!
//! ```rust,ignore
//! use lmu_llm::{build_runner, RunnerConfig};
//!
//! // LMU_BACKEND=ollama LMU_MODEL=llama3
//! let runner = build_runner(&RunnerConfig::from_env()?);
//! let spec = runner.ask("Write the spec.md file for lesson 0.1").await?;
//! ```

pub mod config;
pub mod mock;
pub mod ollama;
pub mod prompt;
pub mod provider;
pub mod responses;

pub use config::{build_runner, Backend, ConfigError, RunnerConfig};
pub use mock::MockOllamaRunner;
pub use ollama::OllamaRunner;
pub use prompt::{PromptKind, Rule, RuleSet};
pub use provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};
pub use responses::{
    ArtifactManifest, ExpectedArtifact, FallbackResponse, LessonPlan, Task, TaskList,
};
