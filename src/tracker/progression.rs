//! Skill tier progression policy.

use crate::catalog::{AgentMetrics, SkillTier};
use crate::config::ProgressionConfig;

/// Promotion thresholds, evaluated after every recorded outcome.
///
/// Evaluation checks the highest tier first and jumps directly to the best
/// tier whose task-count and success-rate floors both hold; an agent
/// finishing its 50th task at 92% moves Novice → Master in one step.
/// Promotion is one-directional: a tier, once reached, is never taken away.
#[derive(Debug, Clone)]
pub struct ProgressionPolicy {
    thresholds: [(SkillTier, u64, f64); 3],
}

impl ProgressionPolicy {
    pub fn new(config: &ProgressionConfig) -> Self {
        Self {
            // Highest tier first; evaluation stops at the first satisfied row.
            thresholds: [
                (SkillTier::Master, config.master_min_tasks, config.master_min_success_rate),
                (SkillTier::Expert, config.expert_min_tasks, config.expert_min_success_rate),
                (
                    SkillTier::Intermediate,
                    config.intermediate_min_tasks,
                    config.intermediate_min_success_rate,
                ),
            ],
        }
    }

    /// The tier the agent should hold given its metrics. Never below
    /// `current`.
    pub fn evaluate(&self, current: SkillTier, metrics: &AgentMetrics) -> SkillTier {
        let earned = self
            .thresholds
            .iter()
            .find(|(_, min_tasks, min_rate)| {
                metrics.total_tasks >= *min_tasks && metrics.success_rate() >= *min_rate
            })
            .map(|(tier, _, _)| *tier)
            .unwrap_or(SkillTier::Novice);

        earned.max(current)
    }
}

impl Default for ProgressionPolicy {
    fn default() -> Self {
        Self::new(&ProgressionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total: u64, successes: u64) -> AgentMetrics {
        AgentMetrics {
            total_tasks: total,
            success_count: successes,
            failure_count: total - successes,
            ..AgentMetrics::default()
        }
    }

    #[test]
    fn test_fresh_agent_stays_novice() {
        let policy = ProgressionPolicy::default();
        assert_eq!(policy.evaluate(SkillTier::Novice, &metrics(0, 0)), SkillTier::Novice);
        assert_eq!(policy.evaluate(SkillTier::Novice, &metrics(4, 4)), SkillTier::Novice);
    }

    #[test]
    fn test_intermediate_threshold_boundary() {
        let policy = ProgressionPolicy::default();
        // 4/5 = 0.80 >= 0.75: promoted
        assert_eq!(
            policy.evaluate(SkillTier::Novice, &metrics(5, 4)),
            SkillTier::Intermediate
        );
        // 3/5 = 0.60 < 0.75: stays put
        assert_eq!(policy.evaluate(SkillTier::Novice, &metrics(5, 3)), SkillTier::Novice);
    }

    #[test]
    fn test_direct_jump_to_highest_satisfied_tier() {
        let policy = ProgressionPolicy::default();
        // 46/50 = 0.92: skips Intermediate and Expert entirely
        assert_eq!(
            policy.evaluate(SkillTier::Novice, &metrics(50, 46)),
            SkillTier::Master
        );
    }

    #[test]
    fn test_expert_requires_both_floors() {
        let policy = ProgressionPolicy::default();
        // Enough tasks, rate short of 0.85
        assert_eq!(
            policy.evaluate(SkillTier::Intermediate, &metrics(20, 16)),
            SkillTier::Intermediate
        );
        // 17/20 = 0.85 exactly
        assert_eq!(
            policy.evaluate(SkillTier::Intermediate, &metrics(20, 17)),
            SkillTier::Expert
        );
    }

    #[test]
    fn test_never_demotes() {
        let policy = ProgressionPolicy::default();
        // A Master whose rate has collapsed keeps the tier.
        assert_eq!(
            policy.evaluate(SkillTier::Master, &metrics(100, 10)),
            SkillTier::Master
        );
        assert_eq!(
            policy.evaluate(SkillTier::Expert, &metrics(6, 5)),
            SkillTier::Expert
        );
    }
}
