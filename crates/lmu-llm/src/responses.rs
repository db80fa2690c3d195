//! Canned curriculum payloads
//!
//! JSON payloads are typed so the pipeline can deserialize them with the
//! same structs; field order follows declaration order when serialized.

use serde::{Deserialize, Serialize};

/// Structured lesson plan returned for the planning step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub objective: String,
    pub constraints: Vec<String>,
    pub success_criteria: Vec<String>,
    pub cuda_analogy_explanation: String,
}

/// One weighted lesson task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub weight: f64,
}

/// Contents of `tasks.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn total_weight(&self) -> f64 {
        self.tasks.iter().map(|t| t.weight).sum()
    }
}

/// One expected lesson output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedArtifact {
    pub artifact: String,
    pub required: bool,
    pub weight: f64,
}

/// Contents of `expected_artifacts.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    pub artifacts: Vec<ExpectedArtifact>,
}

impl ArtifactManifest {
    pub fn total_weight(&self) -> f64 {
        self.artifacts.iter().map(|a| a.weight).sum()
    }
}

/// Generic answer for prompts with no recognised trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackResponse {
    pub response: String,
    pub model: String,
}

pub const FALLBACK_TEXT: &str = "Mock Ollama response";

pub fn lesson_plan() -> LessonPlan {
    LessonPlan {
        objective: "Map LMU concepts to CUDA equivalents".to_string(),
        constraints: vec![
            "No speculative claims".to_string(),
            "Testable criteria only".to_string(),
        ],
        success_criteria: vec![
            "Map 6 concepts correctly".to_string(),
            "Generate valid spec.md".to_string(),
        ],
        cuda_analogy_explanation:
            "LMU operations map to CUDA kernel launches with deterministic execution".to_string(),
    }
}

pub fn task_list() -> TaskList {
    let task = |id: &str, description: &str, weight: f64| Task {
        id: id.to_string(),
        description: description.to_string(),
        weight,
    };
    TaskList {
        tasks: vec![
            task("task1", "Map LMU to CUDA concepts", 0.4),
            task("task2", "Generate spec.md with analogy", 0.35),
            task("task3", "Validate output against schema", 0.25),
        ],
    }
}

pub fn artifact_manifest() -> ArtifactManifest {
    const ARTIFACTS: [(&str, f64); 7] = [
        ("spec.md", 0.15),
        ("tasks.json", 0.15),
        ("run.py", 0.15),
        ("expected_artifacts.json", 0.05),
        ("grader.md", 0.05),
        ("receipts.jsonl", 0.20),
        ("summary.json", 0.25),
    ];
    ArtifactManifest {
        artifacts: ARTIFACTS
            .iter()
            .map(|&(artifact, weight)| ExpectedArtifact {
                artifact: artifact.to_string(),
                required: true,
                weight,
            })
            .collect(),
    }
}

pub fn fallback(model: &str) -> FallbackResponse {
    FallbackResponse {
        response: FALLBACK_TEXT.to_string(),
        model: model.to_string(),
    }
}

pub const SPEC_MD: &str = "# Organization: Celaya Solutions
# Lesson 0.1: Introduction to LMU

## Objective
Understand LMU execution model through CUDA kernel analogy.

## Constraints
- No speculative language
- Testable success criteria only
- Explicit CUDA mapping required

## Success Criteria
- Map 6 LMU/CUDA concept pairs
- Generate valid spec.md with kernel analogy
- Pass validation

## CUDA Analogy
LMU operations are analogous to CUDA kernel execution:
- LMU operation = CUDA kernel
- LMU runner = kernel launch
- LMU lane = warp
- KV cache = SRAM/HBM memory hierarchy
";

pub const GRADER_MD: &str = "# Organization: Celaya Solutions
# Lesson Grader

## Artifact Weights
- spec.md: 15%
- tasks.json: 15%
- run.py: 15%
- expected_artifacts.json: 5%
- grader.md: 5%
- receipts.jsonl: 20%
- summary.json: 25%

## Passing Criteria
Score ≥ 70% required to pass.

## Partial Credit
Missing artifacts score 0 for their weight.
Invalid artifacts score 50% of their weight.

## Receipt Scoring
Receipts must include: lesson_start, op_start, op_done, lesson_complete.

## Summary Scoring
Summary.json must include: status, tasks_completed, tasks_total, score.
";

/// Lesson script; when run it writes `receipts.jsonl` and `summary.json`.
pub const RUN_PY: &str = r##"#!/usr/bin/env python3
"""Lesson execution script."""
import json
from pathlib import Path

def main():
    print("[Lesson] Executing...")

    # Emit receipts
    receipts = []
    receipts.append({"event": "task_start", "task": "concept_mapping"})
    receipts.append({"event": "task_done", "task": "concept_mapping", "status": "success"})

    Path("receipts.jsonl").write_text("\n".join(json.dumps(r) for r in receipts) + "\n")

    # Write summary
    summary = {
        "status": "completed",
        "tasks_completed": 3,
        "tasks_total": 3,
        "score": 0.95
    }
    Path("summary.json").write_text(json.dumps(summary, indent=2))

    print("[Lesson] Complete")

if __name__ == "__main__":
    main()
"##;
