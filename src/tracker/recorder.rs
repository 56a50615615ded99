//! The outcome tracker.

use std::sync::Arc;

use dashmap::DashSet;
use tracing::{debug, info, warn};

use crate::catalog::AgentCatalog;
use crate::config::ProgressionConfig;

use super::outcome::TaskOutcome;
use super::progression::ProgressionPolicy;

/// Consumes completed-task outcomes, updates agent metrics, and re-evaluates
/// skill tiers.
///
/// Concurrent `record` calls for different agents proceed independently;
/// calls for the same agent serialize on that agent's write lock, so the
/// counter invariant `total_tasks == success_count + failure_count` holds
/// under any interleaving. Selection reads may interleave freely with an
/// update in progress (scores are advisory).
pub struct OutcomeTracker {
    catalog: Arc<AgentCatalog>,
    policy: ProgressionPolicy,
    seen: DashSet<(String, String)>,
}

impl OutcomeTracker {
    pub fn new(catalog: Arc<AgentCatalog>, config: &ProgressionConfig) -> Self {
        Self {
            catalog,
            policy: ProgressionPolicy::new(config),
            seen: DashSet::new(),
        }
    }

    /// Record one outcome.
    ///
    /// Never fails: outcomes for unknown agents are logged and dropped, and
    /// a duplicate (task, agent) pair is a no-op.
    pub fn record(&self, outcome: TaskOutcome) {
        let Some(entry) = self.catalog.get(&outcome.agent_name) else {
            warn!(
                agent = %outcome.agent_name,
                task = %outcome.task_id,
                "outcome for unknown agent dropped"
            );
            return;
        };

        // Claim the (task, agent) pair before touching any counters, so
        // racing duplicate submissions cannot both get through.
        if !self
            .seen
            .insert((outcome.task_id.clone(), outcome.agent_name.clone()))
        {
            debug!(
                agent = %outcome.agent_name,
                task = %outcome.task_id,
                "duplicate outcome ignored"
            );
            return;
        }

        let mut state = entry.state().write();
        state.metrics.record(
            outcome.success,
            outcome.execution_time,
            outcome.tokens_used,
            outcome.cost,
        );

        let evaluated = self.policy.evaluate(state.skill_tier, &state.metrics);
        if evaluated > state.skill_tier {
            info!(
                agent = %outcome.agent_name,
                from = %state.skill_tier,
                to = %evaluated,
                total_tasks = state.metrics.total_tasks,
                "skill tier promoted"
            );
            state.skill_tier = evaluated;
        }

        debug!(
            agent = %outcome.agent_name,
            task = %outcome.task_id,
            success = outcome.success,
            total_tasks = state.metrics.total_tasks,
            "outcome recorded"
        );
    }
}
