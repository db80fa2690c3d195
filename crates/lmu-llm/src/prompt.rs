//! Prompt classification
//!
//! Curriculum prompts are routed by ordered, case-insensitive phrase
//! containment. The first rule with a matching phrase wins; prompts that
//! match nothing are [`PromptKind::Unknown`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::ConfigError;

/// The curriculum artifact a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Lesson planning step (structured objective and criteria)
    LessonPlan,
    /// `tasks.json`
    Tasks,
    /// `spec.md`
    Spec,
    /// `expected_artifacts.json`
    ExpectedArtifacts,
    /// `grader.md`
    Grader,
    /// `run.py` / `run.sh`
    Runner,
    /// No trigger phrase matched
    Unknown,
}

impl PromptKind {
    /// Whether a backend answer for this kind is JSON text.
    ///
    /// Markdown documents and scripts come back as plain text.
    pub fn is_json(self) -> bool {
        !matches!(self, Self::Spec | Self::Grader | Self::Runner)
    }

    /// File name of the lesson artifact this kind produces, if any
    pub fn artifact_name(self) -> Option<&'static str> {
        match self {
            Self::Tasks => Some("tasks.json"),
            Self::Spec => Some("spec.md"),
            Self::ExpectedArtifacts => Some("expected_artifacts.json"),
            Self::Grader => Some("grader.md"),
            Self::Runner => Some("run.py"),
            Self::LessonPlan | Self::Unknown => None,
        }
    }
}

/// A dispatch rule: any of `phrases` selects `kind`
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: PromptKind,
    pub phrases: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.phrases.iter().any(|phrase| lowered.contains(phrase))
    }
}

const LESSON_PLAN: Rule = Rule {
    kind: PromptKind::LessonPlan,
    phrases: &["generating a lesson specification"],
};
const TASKS: Rule = Rule {
    kind: PromptKind::Tasks,
    phrases: &["tasks.json file"],
};
const SPEC: Rule = Rule {
    kind: PromptKind::Spec,
    phrases: &["spec.md file"],
};
const EXPECTED_ARTIFACTS: Rule = Rule {
    kind: PromptKind::ExpectedArtifacts,
    phrases: &["expected_artifacts.json", "expected artifacts"],
};
const GRADER: Rule = Rule {
    kind: PromptKind::Grader,
    phrases: &["grader.md", "how this lesson is scored"],
};
const RUNNER: Rule = Rule {
    kind: PromptKind::Runner,
    phrases: &["run.sh", "run.py", "script"],
};

const FULL_RULES: &[Rule] = &[LESSON_PLAN, TASKS, SPEC, EXPECTED_ARTIFACTS, GRADER, RUNNER];
const REDUCED_RULES: &[Rule] = &[LESSON_PLAN, TASKS, SPEC, RUNNER];

/// Which dispatch table a responder uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// All artifact branches
    #[default]
    Full,
    /// Older responder without the expected-artifacts and grader branches
    Reduced,
}

impl RuleSet {
    /// Rules in priority order
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::Full => FULL_RULES,
            Self::Reduced => REDUCED_RULES,
        }
    }

    /// Classify a prompt; first matching rule wins
    pub fn classify(self, prompt: &str) -> PromptKind {
        let lowered = prompt.to_lowercase();
        self.rules()
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.kind)
            .unwrap_or(PromptKind::Unknown)
    }
}

impl FromStr for RuleSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "reduced" => Ok(Self::Reduced),
            other => Err(ConfigError::Invalid(format!("unknown mock rule set '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_trigger() {
        let cases = [
            ("You are generating a lesson specification for LMU", PromptKind::LessonPlan),
            ("Produce the tasks.json file", PromptKind::Tasks),
            ("Write the spec.md file", PromptKind::Spec),
            ("Write the expected_artifacts.json file", PromptKind::ExpectedArtifacts),
            ("List the expected artifacts", PromptKind::ExpectedArtifacts),
            ("Write grader.md", PromptKind::Grader),
            ("Explain how this lesson is scored", PromptKind::Grader),
            ("Write run.sh", PromptKind::Runner),
            ("Write run.py", PromptKind::Runner),
            ("Write the execution script", PromptKind::Runner),
            ("hello", PromptKind::Unknown),
        ];
        for (prompt, expected) in cases {
            assert_eq!(RuleSet::Full.classify(prompt), expected, "prompt: {prompt}");
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(RuleSet::Full.classify("SPEC.MD FILE"), PromptKind::Spec);
        assert_eq!(
            RuleSet::Full.classify("Generating A Lesson Specification"),
            PromptKind::LessonPlan
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // Mentions both tasks.json and spec.md; tasks is checked first.
        let prompt = "Given the spec.md file, write the tasks.json file";
        assert_eq!(RuleSet::Full.classify(prompt), PromptKind::Tasks);

        // "script" is a very loose trigger, so it must come last.
        let prompt = "Describe how this lesson is scored by the grading script";
        assert_eq!(RuleSet::Full.classify(prompt), PromptKind::Grader);
    }

    #[test]
    fn test_reduced_rules_fall_through() {
        assert_eq!(
            RuleSet::Reduced.classify("Write the expected_artifacts.json file"),
            PromptKind::Unknown
        );
        assert_eq!(RuleSet::Reduced.classify("Write grader.md"), PromptKind::Unknown);
        assert_eq!(
            RuleSet::Reduced.classify("Explain how this lesson is scored by the script"),
            PromptKind::Runner
        );
        assert_eq!(RuleSet::Reduced.classify("Write run.py"), PromptKind::Runner);
    }

    #[test]
    fn test_rule_set_from_str() {
        assert_eq!("full".parse::<RuleSet>().unwrap(), RuleSet::Full);
        assert_eq!(" Reduced ".parse::<RuleSet>().unwrap(), RuleSet::Reduced);
        assert!("half".parse::<RuleSet>().is_err());
        assert!("".parse::<RuleSet>().is_err());
    }

    #[test]
    fn test_kind_metadata() {
        assert!(PromptKind::LessonPlan.is_json());
        assert!(PromptKind::Tasks.is_json());
        assert!(PromptKind::ExpectedArtifacts.is_json());
        assert!(PromptKind::Unknown.is_json());
        assert!(!PromptKind::Spec.is_json());
        assert!(!PromptKind::Grader.is_json());
        assert!(!PromptKind::Runner.is_json());

        assert_eq!(PromptKind::Spec.artifact_name(), Some("spec.md"));
        assert_eq!(PromptKind::LessonPlan.artifact_name(), None);
    }
}
