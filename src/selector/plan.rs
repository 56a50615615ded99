//! Delegation plan types.

use serde::{Deserialize, Serialize};

/// Role of one assignment within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRole {
    Primary,
    Supporting,
}

impl std::fmt::Display for AssignmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Supporting => write!(f, "supporting"),
        }
    }
}

/// One agent picked for a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub agent_name: String,
    pub role: AssignmentRole,
    /// Ranking score in [0.0, 1.0]. Advisory only, never persisted.
    pub confidence: f64,
    /// Human-readable selection rationale.
    pub reason: String,
}

/// How the caller should fan out the assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Each assignment's outcome may inform whether the next proceeds.
    Sequential,
    /// Assignments fan out concurrently; the caller waits for all outcomes.
    Parallel,
}

/// The ranked output of selection, not yet executed. Immutable once
/// returned.
#[derive(Debug, Clone, Serialize)]
pub struct DelegationPlan {
    assignments: Vec<Assignment>,
    execution_strategy: ExecutionStrategy,
}

impl DelegationPlan {
    pub(crate) fn new(assignments: Vec<Assignment>, execution_strategy: ExecutionStrategy) -> Self {
        Self {
            assignments,
            execution_strategy,
        }
    }

    /// Assignments in rank order; the primary comes first.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    pub fn primary(&self) -> &Assignment {
        // A plan is only ever constructed with at least a primary.
        &self.assignments[0]
    }

    pub fn supporting(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.role == AssignmentRole::Supporting)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(name: &str, role: AssignmentRole) -> Assignment {
        Assignment {
            agent_name: name.into(),
            role,
            confidence: 0.5,
            reason: String::new(),
        }
    }

    #[test]
    fn test_plan_accessors() {
        let plan = DelegationPlan::new(
            vec![
                assignment("lead", AssignmentRole::Primary),
                assignment("helper", AssignmentRole::Supporting),
            ],
            ExecutionStrategy::Sequential,
        );

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.primary().agent_name, "lead");
        assert_eq!(plan.supporting().count(), 1);
        assert_eq!(plan.execution_strategy(), ExecutionStrategy::Sequential);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(AssignmentRole::Primary.to_string(), "primary");
        assert_eq!(AssignmentRole::Supporting.to_string(), "supporting");
    }
}
