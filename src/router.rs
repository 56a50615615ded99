//! The routing facade: analyze, select, record.

use std::sync::Arc;

use tracing::debug;

use crate::analyzer::{TaskAnalysis, TaskAnalyzer};
use crate::catalog::{AgentCatalog, AgentStore};
use crate::config::RouterConfig;
use crate::error::Result;
use crate::selector::{DelegationPlan, Selector};
use crate::tracker::{OutcomeTracker, TaskOutcome};

/// Composes the analyzer, catalog, selector, and tracker behind the three
/// call contracts the host sees. Execution of a returned plan is the host's
/// responsibility; the router only consumes the terminal outcomes.
pub struct TaskRouter {
    analyzer: TaskAnalyzer,
    selector: Selector,
    tracker: OutcomeTracker,
    catalog: Arc<AgentCatalog>,
    default_max_agents: usize,
}

impl TaskRouter {
    pub fn new(config: RouterConfig, catalog: Arc<AgentCatalog>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            analyzer: TaskAnalyzer::new(config.analyzer.clone()),
            selector: Selector::new(config.selection.clone()),
            tracker: OutcomeTracker::new(Arc::clone(&catalog), &config.progression),
            catalog,
            default_max_agents: config.selection.max_agents,
        })
    }

    /// Build a router whose catalog is loaded from the given store.
    pub fn from_store(config: RouterConfig, store: &dyn AgentStore) -> Result<Self> {
        let catalog = Arc::new(AgentCatalog::from_store(store)?);
        Self::new(config, catalog)
    }

    /// Classify one task description. Pure and deterministic.
    pub fn analyze(&self, text: &str) -> TaskAnalysis {
        self.analyzer.analyze(text)
    }

    /// Rank agents for an analysis and build a delegation plan.
    pub fn select(&self, analysis: &TaskAnalysis, max_agents: usize) -> Result<DelegationPlan> {
        self.selector.select(analysis, &self.catalog, max_agents)
    }

    /// Analyze and select in one step with the configured assignment cap.
    pub fn route(&self, text: &str) -> Result<(TaskAnalysis, DelegationPlan)> {
        let analysis = self.analyze(text);
        let plan = self.select(&analysis, self.default_max_agents)?;
        debug!(
            task_type = %analysis.task_type,
            assignments = plan.len(),
            "routed task"
        );
        Ok((analysis, plan))
    }

    /// Feed one completed-task outcome back into the catalog.
    pub fn record(&self, outcome: TaskOutcome) {
        self.tracker.record(outcome);
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }
}
