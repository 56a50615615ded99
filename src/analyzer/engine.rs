//! The task analyzer itself.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::debug;

use crate::config::AnalyzerConfig;

use super::parallel::{ConjunctionHeuristic, ParallelismHeuristic};
use super::rules;
use super::types::{Complexity, TaskAnalysis, TaskType};

static WORD: OnceLock<Regex> = OnceLock::new();
static SUBTASK_MARKER: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").unwrap())
}

fn subtask_marker_pattern() -> &'static Regex {
    SUBTASK_MARKER.get_or_init(|| Regex::new(r"\b(and|then|also|plus)\b|[,;]").unwrap())
}

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during",
];

/// Converts free-text task descriptions into structured [`TaskAnalysis`]
/// values. Pure computation over its input: deterministic, never fails, and
/// safe to call concurrently.
pub struct TaskAnalyzer {
    config: AnalyzerConfig,
    heuristic: Arc<dyn ParallelismHeuristic>,
}

impl TaskAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            heuristic: Arc::new(ConjunctionHeuristic),
        }
    }

    /// Replace the parallelizability strategy.
    pub fn with_heuristic(mut self, heuristic: Arc<dyn ParallelismHeuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Analyze a task description.
    ///
    /// Empty or whitespace-only input yields the generic analysis; anything
    /// else is classified against the rule table with the language-keyword
    /// fallback.
    pub fn analyze(&self, raw_text: &str) -> TaskAnalysis {
        if raw_text.trim().is_empty() {
            return TaskAnalysis::generic(raw_text);
        }

        let normalized = raw_text.to_lowercase();

        let (task_type, mut required_capabilities) = match rules::first_match(&normalized) {
            Some(rule) => (
                rule.task_type,
                rule.capabilities
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<BTreeSet<_>>(),
            ),
            None => (TaskType::Generic, BTreeSet::new()),
        };

        required_capabilities
            .extend(rules::detect_languages(&normalized).into_iter().map(String::from));

        let complexity = rules::derive_complexity(&normalized);
        let parallelizable = self.heuristic.assess(raw_text);
        let estimated_subtasks = estimate_subtasks(&normalized, complexity);
        let keywords = self.extract_keywords(&normalized);

        debug!(
            task_type = %task_type,
            capabilities = ?required_capabilities,
            complexity = %complexity,
            parallelizable,
            heuristic = self.heuristic.name(),
            "analyzed task"
        );

        TaskAnalysis {
            task_type,
            required_capabilities,
            complexity,
            parallelizable,
            estimated_subtasks,
            keywords,
            raw_text: raw_text.to_string(),
        }
    }

    fn extract_keywords(&self, normalized: &str) -> Vec<String> {
        word_pattern()
            .find_iter(normalized)
            .map(|m| m.as_str())
            .filter(|w| w.len() >= self.config.min_keyword_len && !STOP_WORDS.contains(w))
            .map(String::from)
            .take(self.config.max_keywords)
            .collect()
    }
}

impl Default for TaskAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Rough subtask estimate: one base task plus one per conjunction marker,
/// scaled by complexity.
fn estimate_subtasks(normalized: &str, complexity: Complexity) -> usize {
    let markers = subtask_marker_pattern().find_iter(normalized).count();
    let estimate = ((1 + markers) as f64 * complexity.subtask_multiplier()) as usize;
    estimate.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_is_deterministic() {
        let analyzer = TaskAnalyzer::default();
        let text = "implement a feature for the python api and containerize the service";

        let first = analyzer.analyze(text);
        let second = analyzer.analyze(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classified_task() {
        let analyzer = TaskAnalyzer::default();
        let analysis = analyzer.analyze("Fix the bug in the python importer");

        assert_eq!(analysis.task_type, TaskType::BugFixing);
        assert!(analysis.required_capabilities.contains("bug_fixing"));
        assert!(analysis.required_capabilities.contains("python"));
        assert_eq!(analysis.raw_text, "Fix the bug in the python importer");
    }

    #[test]
    fn test_language_fallback_when_no_rule_matches() {
        let analyzer = TaskAnalyzer::default();
        let analysis = analyzer.analyze("port everything to rust");

        assert_eq!(analysis.task_type, TaskType::Generic);
        assert_eq!(
            analysis.required_capabilities,
            BTreeSet::from(["rust".to_string()])
        );
    }

    #[test]
    fn test_empty_input_degrades_to_generic() {
        let analyzer = TaskAnalyzer::default();
        for input in ["", "   ", "\n\t "] {
            let analysis = analyzer.analyze(input);
            assert_eq!(analysis.task_type, TaskType::Generic);
            assert!(analysis.required_capabilities.is_empty());
            assert_eq!(analysis.complexity, Complexity::Simple);
            assert!(!analysis.parallelizable);
        }
    }

    #[test]
    fn test_complexity_tiers() {
        let analyzer = TaskAnalyzer::default();
        assert_eq!(
            analyzer.analyze("refactor the code across the whole system").complexity,
            Complexity::Complex
        );
        assert_eq!(
            analyzer.analyze("implement a feature").complexity,
            Complexity::Medium
        );
        assert_eq!(
            analyzer.analyze("rename one variable").complexity,
            Complexity::Simple
        );
    }

    #[test]
    fn test_keyword_extraction_drops_stop_words() {
        let analyzer = TaskAnalyzer::default();
        let analysis = analyzer.analyze("fix the bug in the importer during startup");

        assert!(analysis.keywords.contains(&"importer".to_string()));
        assert!(analysis.keywords.contains(&"startup".to_string()));
        assert!(!analysis.keywords.contains(&"the".to_string()));
        assert!(!analysis.keywords.contains(&"during".to_string()));
        // Short words fall below the length cutoff
        assert!(!analysis.keywords.contains(&"fix".to_string()));
    }

    #[test]
    fn test_subtask_estimate_scales_with_markers_and_complexity() {
        assert_eq!(estimate_subtasks("one task", Complexity::Simple), 1);
        assert_eq!(estimate_subtasks("this and that", Complexity::Simple), 2);
        // Two markers at complex tier: (1 + 2) * 2.0 = 6
        assert_eq!(
            estimate_subtasks("this and that, distributed", Complexity::Complex),
            6
        );
    }

    #[test]
    fn test_custom_heuristic_is_honored() {
        struct Always;
        impl ParallelismHeuristic for Always {
            fn assess(&self, _text: &str) -> bool {
                true
            }
        }

        let analyzer = TaskAnalyzer::default().with_heuristic(Arc::new(Always));
        assert!(analyzer.analyze("fix the bug").parallelizable);
    }
}
