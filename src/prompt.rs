//! Prompt composition for assigned agents.

use crate::catalog::AgentEntry;

/// Builds the specialist prompt handed to an execution backend along with an
/// assignment: the task text first, optional context sections, then
/// role-focus guidance.
pub struct AssignmentPromptBuilder {
    sections: Vec<String>,
}

impl AssignmentPromptBuilder {
    pub fn new(task_text: &str) -> Self {
        Self {
            sections: vec![task_text.to_string()],
        }
    }

    pub fn with_relevant_files(mut self, files: &[String]) -> Self {
        if !files.is_empty() {
            self.sections
                .push(format!("\nRelevant files: {}", files.join(", ")));
        }
        self
    }

    pub fn with_previous_results(mut self, results: &str) -> Self {
        if !results.is_empty() {
            self.sections.push(format!("\nPrevious results: {}", results));
        }
        self
    }

    pub fn with_constraints(mut self, constraints: &str) -> Self {
        if !constraints.is_empty() {
            self.sections.push(format!("\nConstraints: {}", constraints));
        }
        self
    }

    /// Append focus guidance derived from the agent's description.
    pub fn with_role_guidance(mut self, agent: &AgentEntry) -> Self {
        self.sections.push(format!(
            "\nYou are {}: {}. Focus on your area of expertise.",
            agent.name(),
            agent.description()
        ));
        self
    }

    pub fn build(self) -> String {
        self.sections.join("\n")
    }
}
