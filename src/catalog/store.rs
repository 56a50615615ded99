//! Agent store interface and the built-in roster.
//!
//! Where definitions live (files, a database, a remote service) is a host
//! concern; the core only needs a load call that yields declarative records.

use crate::error::Result;

use super::types::AgentDefinition;

/// Read interface to the declarative agent store.
pub trait AgentStore: Send + Sync {
    fn load(&self) -> Result<Vec<AgentDefinition>>;
}

/// Store backed by definitions already in memory. Useful for tests and for
/// hosts that do their own deserialization.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    definitions: Vec<AgentDefinition>,
}

impl InMemoryStore {
    pub fn new(definitions: Vec<AgentDefinition>) -> Self {
        Self { definitions }
    }

    /// A store seeded with the default specialist roster.
    pub fn with_defaults() -> Self {
        Self::new(default_roster())
    }
}

impl AgentStore for InMemoryStore {
    fn load(&self) -> Result<Vec<AgentDefinition>> {
        Ok(self.definitions.clone())
    }
}

/// The default six-specialist roster.
pub fn default_roster() -> Vec<AgentDefinition> {
    vec![
        AgentDefinition::new(
            "code_analyst",
            "Analyzes code structure, identifies issues, suggests improvements",
        )
        .with_capabilities([
            "code_review",
            "architecture",
            "python",
            "javascript",
            "typescript",
            "refactoring",
            "best_practices",
        ])
        .with_tools(["Read", "Grep", "Glob"]),
        AgentDefinition::new(
            "code_writer",
            "Implements features, fixes bugs, and writes maintainable code",
        )
        .with_capabilities([
            "implementation",
            "python",
            "javascript",
            "typescript",
            "bug_fixing",
            "feature_development",
        ])
        .with_tools(["Read", "Write", "Edit", "Glob"]),
        AgentDefinition::new(
            "tester",
            "Runs test suites, validates functionality, and ensures quality",
        )
        .with_capabilities(["testing", "qa", "validation", "pytest", "jest", "unittest"])
        .with_tools(["Bash", "Read", "Grep"]),
        AgentDefinition::new(
            "researcher",
            "Gathers information, researches best practices, and finds documentation",
        )
        .with_capabilities(["research", "documentation", "best_practices", "libraries", "apis"])
        .with_tools(["WebSearch", "WebFetch", "Read", "Write"]),
        AgentDefinition::new(
            "devops",
            "Handles builds, deployments, environment setup, and infrastructure",
        )
        .with_capabilities(["devops", "deployment", "docker", "ci_cd", "build", "environment"])
        .with_tools(["Bash", "Read", "Write", "Edit"]),
        AgentDefinition::new(
            "docs_writer",
            "Creates clear technical documentation and guides",
        )
        .with_capabilities([
            "documentation",
            "technical_writing",
            "markdown",
            "tutorials",
            "api_docs",
        ])
        .with_tools(["Read", "Write", "Glob"]),
    ]
}
