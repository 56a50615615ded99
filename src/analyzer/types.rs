//! Analysis result types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The fixed task classification vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    CodeAnalysis,
    Implementation,
    Refactoring,
    BugFixing,
    Testing,
    Research,
    Documentation,
    DevOps,
    Generic,
}

impl TaskType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CodeAnalysis => "code_analysis",
            Self::Implementation => "implementation",
            Self::Refactoring => "refactoring",
            Self::BugFixing => "bug_fixing",
            Self::Testing => "testing",
            Self::Research => "research",
            Self::Documentation => "documentation",
            Self::DevOps => "devops",
            Self::Generic => "generic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "code_analysis" | "analysis" | "review" => Some(Self::CodeAnalysis),
            "implementation" | "implement" => Some(Self::Implementation),
            "refactoring" | "refactor" => Some(Self::Refactoring),
            "bug_fixing" | "bugfix" | "debug" => Some(Self::BugFixing),
            "testing" | "test" => Some(Self::Testing),
            "research" => Some(Self::Research),
            "documentation" | "docs" => Some(Self::Documentation),
            "devops" => Some(Self::DevOps),
            "generic" | "general" => Some(Self::Generic),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordinal task complexity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    /// Subtask-estimate multiplier for this tier.
    pub fn subtask_multiplier(&self) -> f64 {
        match self {
            Self::Simple => 1.0,
            Self::Medium => 1.5,
            Self::Complex => 2.0,
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structured result of analyzing one task description.
///
/// Read-only after construction; the caller owns it for the duration of one
/// routing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub task_type: TaskType,
    pub required_capabilities: BTreeSet<String>,
    pub complexity: Complexity,
    pub parallelizable: bool,
    pub estimated_subtasks: usize,
    pub keywords: Vec<String>,
    /// The original input, unmodified.
    pub raw_text: String,
}

impl TaskAnalysis {
    /// Analysis for input that carries no classifiable signal.
    pub(crate) fn generic(raw_text: impl Into<String>) -> Self {
        Self {
            task_type: TaskType::Generic,
            required_capabilities: BTreeSet::new(),
            complexity: Complexity::Simple,
            parallelizable: false,
            estimated_subtasks: 1,
            keywords: Vec::new(),
            raw_text: raw_text.into(),
        }
    }
}
