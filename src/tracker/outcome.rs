//! Terminal task outcome reports.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The terminal report of one assignment's execution, fed back into the
/// tracker by the caller. Submitted once per (task, agent) pair; the tracker
/// is idempotent against duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub task_id: String,
    pub agent_name: String,
    pub success: bool,
    #[serde(default)]
    pub execution_time: Duration,
    /// Opaque usage figure, accumulated as-is.
    #[serde(default)]
    pub tokens_used: u64,
    /// Opaque cost figure, accumulated as-is.
    #[serde(default)]
    pub cost: f64,
}

impl TaskOutcome {
    pub fn new(task_id: impl Into<String>, agent_name: impl Into<String>, success: bool) -> Self {
        Self {
            task_id: task_id.into(),
            agent_name: agent_name.into(),
            success,
            execution_time: Duration::ZERO,
            tokens_used: 0,
            cost: 0.0,
        }
    }

    pub fn with_execution_time(mut self, execution_time: Duration) -> Self {
        self.execution_time = execution_time;
        self
    }

    pub fn with_usage(mut self, tokens_used: u64, cost: f64) -> Self {
        self.tokens_used = tokens_used;
        self.cost = cost;
        self
    }
}
