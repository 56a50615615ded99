//! The catalog itself: lookup by name and capability, stats snapshots.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Result, RouteError};

use super::store::AgentStore;
use super::types::{AgentDefinition, AgentMetrics, AgentState, SkillTier};

/// One catalog entry. Identity fields never change after load; the mutable
/// state (metrics, skill tier) is guarded by a per-agent lock with the
/// outcome tracker as its only writer.
#[derive(Debug)]
pub struct AgentEntry {
    name: String,
    description: String,
    capabilities: BTreeSet<String>,
    tool_allowance: BTreeSet<String>,
    state: RwLock<AgentState>,
}

impl AgentEntry {
    fn from_definition(def: AgentDefinition) -> Self {
        Self {
            name: def.name,
            description: def.description,
            capabilities: def.capabilities,
            tool_allowance: def.tool_allowance,
            state: RwLock::new(AgentState {
                skill_tier: def.skill_tier,
                metrics: def.metrics,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn capabilities(&self) -> &BTreeSet<String> {
        &self.capabilities
    }

    pub fn tool_allowance(&self) -> &BTreeSet<String> {
        &self.tool_allowance
    }

    pub fn skill_tier(&self) -> SkillTier {
        self.state.read().skill_tier
    }

    /// Snapshot of the current metrics. A reader may observe a state
    /// mid-update relative to other agents; per-agent consistency is
    /// guaranteed by the lock.
    pub fn metrics(&self) -> AgentMetrics {
        self.state.read().metrics.clone()
    }

    /// True when this agent's capability set intersects `tags`.
    pub fn shares_any_capability(&self, tags: &BTreeSet<String>) -> bool {
        !self.capabilities.is_disjoint(tags)
    }

    /// Rebuild the declarative definition, including live state. Hosts use
    /// this to flush catalog mutations to their durable store.
    pub fn to_definition(&self) -> AgentDefinition {
        let state = self.state.read();
        AgentDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            capabilities: self.capabilities.clone(),
            tool_allowance: self.tool_allowance.clone(),
            skill_tier: state.skill_tier,
            metrics: state.metrics.clone(),
        }
    }

    pub(crate) fn state(&self) -> &RwLock<AgentState> {
        &self.state
    }
}

/// The set of available workers and their running performance state.
///
/// Loaded once at startup; the map itself is immutable afterwards, so reads
/// take no catalog-wide lock.
pub struct AgentCatalog {
    agents: HashMap<String, Arc<AgentEntry>>,
}

impl AgentCatalog {
    /// Build a catalog from declarative definitions. Duplicate names are a
    /// load error: silently keeping one of two same-named agents would make
    /// outcome attribution ambiguous.
    pub fn from_definitions(definitions: Vec<AgentDefinition>) -> Result<Self> {
        let mut agents = HashMap::with_capacity(definitions.len());
        for def in definitions {
            let name = def.name.clone();
            if agents
                .insert(name.clone(), Arc::new(AgentEntry::from_definition(def)))
                .is_some()
            {
                return Err(RouteError::Store(format!(
                    "duplicate agent name: {}",
                    name
                )));
            }
        }
        debug!(count = agents.len(), "catalog loaded");
        Ok(Self { agents })
    }

    /// Load the catalog from an agent store.
    pub fn from_store(store: &dyn AgentStore) -> Result<Self> {
        Self::from_definitions(store.load()?)
    }

    pub fn get(&self, name: &str) -> Option<Arc<AgentEntry>> {
        self.agents.get(name).cloned()
    }

    /// All agents, sorted by name for deterministic iteration.
    pub fn all_agents(&self) -> Vec<Arc<AgentEntry>> {
        let mut agents: Vec<_> = self.agents.values().cloned().collect();
        agents.sort_by(|a, b| a.name.cmp(&b.name));
        agents
    }

    /// Agents whose capability set intersects `tags`. Order is unspecified.
    pub fn by_capabilities(&self, tags: &BTreeSet<String>) -> Vec<Arc<AgentEntry>> {
        self.agents
            .values()
            .filter(|agent| agent.shares_any_capability(tags))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Definitions including live state, sorted by name. The host's
    /// persistence layer serializes these after each recorded outcome.
    pub fn export_definitions(&self) -> Vec<AgentDefinition> {
        self.all_agents()
            .iter()
            .map(|agent| agent.to_definition())
            .collect()
    }

    /// Catalog-wide statistics snapshot.
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total_agents: self.agents.len(),
            ..CatalogStats::default()
        };
        for tier in SkillTier::all() {
            stats.tier_distribution.insert(*tier, 0);
        }
        for agent in self.agents.values() {
            let state = agent.state.read();
            stats.total_tasks += state.metrics.total_tasks;
            stats.total_cost += state.metrics.total_cost;
            *stats.tier_distribution.entry(state.skill_tier).or_insert(0) += 1;
        }
        stats
    }
}

/// Aggregate view over the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStats {
    pub total_agents: usize,
    pub total_tasks: u64,
    pub total_cost: f64,
    pub tier_distribution: BTreeMap<SkillTier, usize>,
}
