//! Selection engine: ranking and plan construction.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::analyzer::TaskAnalysis;
use crate::catalog::{AgentCatalog, AgentEntry};
use crate::config::SelectionConfig;
use crate::error::{Result, RouteError};

use super::plan::{Assignment, AssignmentRole, DelegationPlan, ExecutionStrategy};
use super::scoring::score_agent;

/// Produces a ranked [`DelegationPlan`] from a task analysis and the current
/// catalog snapshot.
pub struct Selector {
    config: SelectionConfig,
}

impl Selector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Select up to `max_agents` agents for the analyzed task.
    ///
    /// The only hard failure is [`RouteError::NoEligibleAgent`]: an empty
    /// catalog, or a non-empty requirement that intersects no agent's
    /// capability set. Partial overlap still yields a plan from the
    /// best-available candidates.
    pub fn select(
        &self,
        analysis: &TaskAnalysis,
        catalog: &AgentCatalog,
        max_agents: usize,
    ) -> Result<DelegationPlan> {
        let required = &analysis.required_capabilities;

        if catalog.is_empty()
            || (!required.is_empty() && catalog.by_capabilities(required).is_empty())
        {
            return Err(RouteError::NoEligibleAgent {
                required: required.iter().cloned().collect(),
            });
        }

        let max_agents = max_agents.max(1);
        let ranked = self.rank(catalog, required);

        let mut assignments = Vec::with_capacity(max_agents);
        let mut assigned_entries: Vec<Arc<AgentEntry>> = Vec::with_capacity(max_agents);

        let (primary, primary_score) = &ranked[0];
        assignments.push(Assignment {
            agent_name: primary.name().to_string(),
            role: AssignmentRole::Primary,
            confidence: primary_score.clamp(0.0, 1.0),
            reason: primary_reason(required),
        });
        assigned_entries.push(Arc::clone(primary));

        // Greedy set-cover over the remaining ranked candidates: an agent
        // joins only if it contributes required tags no higher-ranked pick
        // already covers. Greedy, not an exhaustive optimal cover.
        let mut covered: BTreeSet<String> = primary
            .capabilities()
            .intersection(required)
            .cloned()
            .collect();

        for (entry, score) in ranked.iter().skip(1) {
            if assignments.len() >= max_agents || covered.len() == required.len() {
                break;
            }
            let contribution: Vec<String> = entry
                .capabilities()
                .intersection(required)
                .filter(|tag| !covered.contains(*tag))
                .cloned()
                .collect();
            if contribution.is_empty() {
                continue;
            }

            covered.extend(contribution.iter().cloned());
            assignments.push(Assignment {
                agent_name: entry.name().to_string(),
                role: AssignmentRole::Supporting,
                confidence: score.clamp(0.0, 1.0),
                reason: format!("covers {}", contribution.join(", ")),
            });
            assigned_entries.push(Arc::clone(entry));
        }

        let execution_strategy = derive_strategy(analysis, &assigned_entries);

        debug!(
            primary = %assignments[0].agent_name,
            assignments = assignments.len(),
            strategy = ?execution_strategy,
            "selection complete"
        );

        Ok(DelegationPlan::new(assignments, execution_strategy))
    }

    /// Descending by score; ties broken by lexicographic name order so
    /// repeated runs rank identically.
    fn rank(
        &self,
        catalog: &AgentCatalog,
        required: &BTreeSet<String>,
    ) -> Vec<(Arc<AgentEntry>, f64)> {
        let mut ranked: Vec<(Arc<AgentEntry>, f64)> = catalog
            .all_agents()
            .into_iter()
            .map(|entry| {
                let score = score_agent(&self.config.weights, &entry, required, false);
                (entry, score)
            })
            .collect();

        ranked.sort_by(|(a, score_a), (b, score_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name().cmp(b.name()))
        });
        ranked
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

fn primary_reason(required: &BTreeSet<String>) -> String {
    if required.is_empty() {
        "highest ranked agent".to_string()
    } else {
        let top: Vec<_> = required.iter().take(2).cloned().collect();
        format!("best match for {}", top.join(", "))
    }
}

/// Parallel only when the analysis says so, at least two agents are
/// assigned, and no two assigned agents share a capability tag (shared tags
/// imply contention on the same kind of resource).
fn derive_strategy(analysis: &TaskAnalysis, assigned: &[Arc<AgentEntry>]) -> ExecutionStrategy {
    if !analysis.parallelizable || assigned.len() < 2 {
        return ExecutionStrategy::Sequential;
    }

    let contention = assigned.iter().enumerate().any(|(i, a)| {
        assigned[i + 1..]
            .iter()
            .any(|b| !a.capabilities().is_disjoint(b.capabilities()))
    });

    if contention {
        ExecutionStrategy::Sequential
    } else {
        ExecutionStrategy::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::TaskAnalyzer;
    use crate::catalog::AgentDefinition;

    fn catalog(defs: Vec<AgentDefinition>) -> AgentCatalog {
        AgentCatalog::from_definitions(defs).unwrap()
    }

    fn analysis_requiring<const N: usize>(caps: [&str; N]) -> TaskAnalysis {
        TaskAnalysis {
            required_capabilities: caps.into_iter().map(String::from).collect(),
            ..TaskAnalyzer::default().analyze("placeholder input")
        }
    }

    #[test]
    fn test_full_match_outranks_no_match() {
        let catalog = catalog(vec![
            AgentDefinition::new("a", "").with_capabilities(["python"]),
            AgentDefinition::new("b", "").with_capabilities(["python", "security"]),
        ]);
        let analysis = analysis_requiring(["security"]);

        let plan = Selector::default().select(&analysis, &catalog, 3).unwrap();
        assert_eq!(plan.primary().agent_name, "b");
    }

    #[test]
    fn test_no_eligible_agent() {
        let catalog = catalog(vec![
            AgentDefinition::new("a", "").with_capabilities(["python"]),
        ]);
        let analysis = analysis_requiring(["security"]);

        let err = Selector::default().select(&analysis, &catalog, 3).unwrap_err();
        assert!(err.is_no_eligible_agent());
    }

    #[test]
    fn test_empty_catalog_is_no_eligible_agent() {
        let catalog = catalog(vec![]);
        let analysis = analysis_requiring([]);

        let err = Selector::default().select(&analysis, &catalog, 3).unwrap_err();
        assert!(err.is_no_eligible_agent());
    }

    #[test]
    fn test_tie_broken_by_name() {
        // Identical capabilities, zero history, same tier: scores tie and
        // lexicographic order must decide, run after run.
        let defs = || {
            vec![
                AgentDefinition::new("zeta", "").with_capabilities(["python"]),
                AgentDefinition::new("alpha", "").with_capabilities(["python"]),
            ]
        };
        let analysis = analysis_requiring(["python"]);

        for _ in 0..5 {
            let plan = Selector::default()
                .select(&analysis, &catalog(defs()), 1)
                .unwrap();
            assert_eq!(plan.primary().agent_name, "alpha");
        }
    }

    #[test]
    fn test_supporting_picks_cover_remaining_tags() {
        let catalog = catalog(vec![
            AgentDefinition::new("generalist", "").with_capabilities(["python", "testing"]),
            AgentDefinition::new("sec", "").with_capabilities(["security"]),
            AgentDefinition::new("redundant", "").with_capabilities(["python"]),
        ]);
        let analysis = analysis_requiring(["python", "testing", "security"]);

        let plan = Selector::default().select(&analysis, &catalog, 3).unwrap();

        assert_eq!(plan.primary().agent_name, "generalist");
        let supporting: Vec<_> = plan.supporting().map(|a| a.agent_name.clone()).collect();
        // "sec" contributes the uncovered tag; "redundant" contributes nothing new.
        assert_eq!(supporting, vec!["sec"]);
    }

    #[test]
    fn test_max_agents_caps_assignments() {
        let catalog = catalog(vec![
            AgentDefinition::new("a", "").with_capabilities(["x"]),
            AgentDefinition::new("b", "").with_capabilities(["y"]),
            AgentDefinition::new("c", "").with_capabilities(["z"]),
        ]);
        let analysis = analysis_requiring(["x", "y", "z"]);

        let plan = Selector::default().select(&analysis, &catalog, 2).unwrap();
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_partial_overlap_still_plans() {
        let catalog = catalog(vec![
            AgentDefinition::new("partial", "").with_capabilities(["python"]),
        ]);
        let analysis = analysis_requiring(["python", "security"]);

        let plan = Selector::default().select(&analysis, &catalog, 3).unwrap();
        assert_eq!(plan.primary().agent_name, "partial");
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_parallel_strategy_requires_disjoint_capabilities() {
        let defs = vec![
            AgentDefinition::new("docs", "").with_capabilities(["documentation"]),
            AgentDefinition::new("ops", "").with_capabilities(["devops"]),
        ];
        let mut analysis = analysis_requiring(["documentation", "devops"]);
        analysis.parallelizable = true;

        let plan = Selector::default()
            .select(&analysis, &catalog(defs.clone()), 3)
            .unwrap();
        assert_eq!(plan.execution_strategy(), ExecutionStrategy::Parallel);

        // A shared tag forces sequential execution.
        let defs_shared = vec![
            AgentDefinition::new("docs", "").with_capabilities(["documentation", "git"]),
            AgentDefinition::new("ops", "").with_capabilities(["devops", "git"]),
        ];
        let plan = Selector::default()
            .select(&analysis, &catalog(defs_shared), 3)
            .unwrap();
        assert_eq!(plan.execution_strategy(), ExecutionStrategy::Sequential);
    }

    #[test]
    fn test_sequential_when_not_parallelizable() {
        let defs = vec![
            AgentDefinition::new("docs", "").with_capabilities(["documentation"]),
            AgentDefinition::new("ops", "").with_capabilities(["devops"]),
        ];
        let mut analysis = analysis_requiring(["documentation", "devops"]);
        analysis.parallelizable = false;

        let plan = Selector::default().select(&analysis, &catalog(defs), 3).unwrap();
        assert_eq!(plan.execution_strategy(), ExecutionStrategy::Sequential);
    }

    #[test]
    fn test_empty_requirements_rank_by_history() {
        let catalog = catalog(vec![
            AgentDefinition::new("seasoned", "")
                .with_capabilities(["python"])
                .with_tier(crate::catalog::SkillTier::Expert),
            AgentDefinition::new("rookie", "").with_capabilities(["python"]),
        ]);
        let analysis = analysis_requiring([]);

        let plan = Selector::default().select(&analysis, &catalog, 3).unwrap();
        assert_eq!(plan.primary().agent_name, "seasoned");
        assert_eq!(plan.primary().reason, "highest ranked agent");
        // No required tags means no coverage to contribute: primary only.
        assert_eq!(plan.len(), 1);
    }
}
