//! Agent definition, skill tier, and metrics types.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agent skill progression tiers, lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    #[default]
    Novice,
    Intermediate,
    Expert,
    Master,
}

impl SkillTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "novice" => Some(Self::Novice),
            "intermediate" => Some(Self::Intermediate),
            "expert" => Some(Self::Expert),
            "master" => Some(Self::Master),
            _ => None,
        }
    }

    pub fn all() -> &'static [SkillTier] {
        &[Self::Novice, Self::Intermediate, Self::Expert, Self::Master]
    }

    /// Raw scoring multiplier for this tier. Normalized to [0, 1] by the
    /// selector (divided by the Master multiplier).
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Novice => 1.0,
            Self::Intermediate => 1.2,
            Self::Expert => 1.5,
            Self::Master => 2.0,
        }
    }
}

impl std::fmt::Display for SkillTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Running performance metrics for one agent.
///
/// Counters are monotonically non-decreasing and updated exactly once per
/// reported outcome, always preserving
/// `total_tasks == success_count + failure_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentMetrics {
    pub total_tasks: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub total_execution_time: Duration,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl AgentMetrics {
    /// Fraction of recorded tasks that succeeded; 0.0 with no history.
    pub fn success_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.success_count as f64 / self.total_tasks as f64
        }
    }

    pub fn avg_execution_time(&self) -> Duration {
        if self.total_tasks == 0 {
            Duration::ZERO
        } else {
            self.total_execution_time / self.total_tasks as u32
        }
    }

    /// Fold one outcome into the counters. Callers must hold the agent's
    /// write lock so concurrent updates cannot lose increments.
    pub(crate) fn record(
        &mut self,
        success: bool,
        execution_time: Duration,
        tokens_used: u64,
        cost: f64,
    ) {
        self.total_tasks += 1;
        if success {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
        self.total_execution_time += execution_time;
        self.total_tokens += tokens_used;
        self.total_cost += cost;
        self.last_used_at = Some(Utc::now());
    }
}

/// Mutable per-agent state: everything the outcome tracker may change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentState {
    pub skill_tier: SkillTier,
    pub metrics: AgentMetrics,
}

/// Declarative specification of one specialist worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
    /// Side-effecting operations the agent is permitted to use. Informational
    /// to the routing core; enforcement happens in the host's session layer.
    #[serde(default)]
    pub tool_allowance: BTreeSet<String>,
    #[serde(default)]
    pub skill_tier: SkillTier,
    #[serde(default)]
    pub metrics: AgentMetrics,
}

impl AgentDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            capabilities: BTreeSet::new(),
            tool_allowance: BTreeSet::new(),
            skill_tier: SkillTier::default(),
            metrics: AgentMetrics::default(),
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_allowance = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tier(mut self, tier: SkillTier) -> Self {
        self.skill_tier = tier;
        self
    }
}
