//! Ordered classification rule table.
//!
//! Rule order is part of the classification contract: when several patterns
//! match the same input, the earliest rule in the table wins. Keeping the
//! rules as data makes the priority inspectable and testable independent of
//! control flow.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use super::types::{Complexity, TaskType};

/// One entry of the ordered classification table.
#[derive(Debug)]
pub struct ClassificationRule {
    pattern: Regex,
    pub task_type: TaskType,
    pub capabilities: &'static [&'static str],
}

impl ClassificationRule {
    fn new(pattern: &str, task_type: TaskType, capabilities: &'static [&'static str]) -> Self {
        Self {
            // Table patterns are fixed at compile time; a failure here is a
            // programming error caught by the table integrity test.
            pattern: Regex::new(pattern).expect("invalid classification pattern"),
            task_type,
            capabilities,
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

static RULES: OnceLock<Vec<ClassificationRule>> = OnceLock::new();

/// The classification table, earliest entry wins.
pub fn classification_rules() -> &'static [ClassificationRule] {
    RULES.get_or_init(|| {
        vec![
            ClassificationRule::new(
                r"\b(review|analyze|examine|inspect)\s+(the\s+)?(code|implementation|module|function)",
                TaskType::CodeAnalysis,
                &["code_review", "architecture", "best_practices"],
            ),
            ClassificationRule::new(
                r"\b(implement|create|build|add|write)\s+(a\s+|an\s+|the\s+)?(feature|functionality|function|class|module)",
                TaskType::Implementation,
                &["implementation", "feature_development"],
            ),
            ClassificationRule::new(
                r"\b(refactor|improve|optimize|clean\s*up)\s+(the\s+)?(code|implementation)",
                TaskType::Refactoring,
                &["refactoring", "code_review", "implementation"],
            ),
            ClassificationRule::new(
                r"\b(fix|resolve|debug)\s+(a\s+|the\s+)?(bug|issue|error|problem)",
                TaskType::BugFixing,
                &["bug_fixing", "implementation"],
            ),
            ClassificationRule::new(
                r"\b(test|validate|verify|check)\s+(the\s+)?(code|functionality|feature|implementation)",
                TaskType::Testing,
                &["testing", "qa", "validation"],
            ),
            ClassificationRule::new(
                r"\b(research|investigate|find|search\s*for)\s+(documentation|library|best\s*practices?|solution)",
                TaskType::Research,
                &["research", "documentation", "best_practices"],
            ),
            ClassificationRule::new(
                r"\b(document|write\s*docs|create\s*documentation|add\s*comments)",
                TaskType::Documentation,
                &["documentation", "technical_writing"],
            ),
            ClassificationRule::new(
                r"\b(deploy|build|setup|configure)\s+(the\s+)?(application|environment|pipeline|infrastructure)",
                TaskType::DevOps,
                &["devops", "deployment", "environment"],
            ),
            ClassificationRule::new(
                r"\b(docker|containerize|kubernetes)",
                TaskType::DevOps,
                &["devops", "docker"],
            ),
        ]
    })
}

/// First matching rule against lower-cased input, or `None`.
pub(crate) fn first_match(normalized: &str) -> Option<&'static ClassificationRule> {
    classification_rules().iter().find(|r| r.matches(normalized))
}

static LANGUAGES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

/// Language/tool keyword mapping. Matched tags are added as required
/// capabilities regardless of which classification rule fired.
fn language_patterns() -> &'static [(Regex, &'static str)] {
    LANGUAGES.get_or_init(|| {
        [
            (r"\bpython\b", "python"),
            (r"\bjavascript\b|\bjs\b|\bnode\b", "javascript"),
            (r"\btypescript\b|\bts\b", "typescript"),
            (r"\bjava\b", "java"),
            (r"\bgo\b|\bgolang\b", "go"),
            (r"\brust\b", "rust"),
            (r"\bc\+\+|\bcpp\b", "cpp"),
        ]
        .into_iter()
        .map(|(p, tag)| (Regex::new(p).expect("invalid language pattern"), tag))
        .collect()
    })
}

pub(crate) fn detect_languages(normalized: &str) -> Vec<&'static str> {
    language_patterns()
        .iter()
        .filter(|(pattern, _)| pattern.is_match(normalized))
        .map(|(_, tag)| *tag)
        .collect()
}

/// Capability profile of one text fragment: the first matching rule's tags
/// plus any detected language tags. Used both for whole-input classification
/// and for per-segment comparison in the parallelism heuristic.
pub(crate) fn capability_profile(normalized: &str) -> BTreeSet<String> {
    let mut capabilities = BTreeSet::new();
    if let Some(rule) = first_match(normalized) {
        capabilities.extend(rule.capabilities.iter().map(|c| c.to_string()));
    }
    capabilities.extend(detect_languages(normalized).into_iter().map(String::from));
    capabilities
}

const COMPLEXITY_HIGH: &[&str] = &[
    "refactor",
    "architecture",
    "system",
    "multiple",
    "complex",
    "scalable",
    "distributed",
    "migration",
];

const COMPLEXITY_MEDIUM: &[&str] = &["implement", "feature", "integration", "api", "module"];

/// Complexity from signal keywords: any high keyword wins, then any medium
/// keyword, else simple.
pub(crate) fn derive_complexity(normalized: &str) -> Complexity {
    if COMPLEXITY_HIGH.iter().any(|k| normalized.contains(k)) {
        Complexity::Complex
    } else if COMPLEXITY_MEDIUM.iter().any(|k| normalized.contains(k)) {
        Complexity::Medium
    } else {
        Complexity::Simple
    }
}
