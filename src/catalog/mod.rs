//! Agent catalog: worker definitions, performance metrics, capability lookup.
//!
//! The catalog is loaded once at startup from an [`AgentStore`] and is then
//! mutated in place only through the outcome tracker's update path. Identity
//! fields (name, capabilities, tool allowance) are immutable and read
//! lock-free; the mutable state (metrics, skill tier) sits behind a per-agent
//! lock so reads interleave safely with the single writer.

mod registry;
mod store;
mod types;

pub use registry::{AgentCatalog, AgentEntry, CatalogStats};
pub use store::{default_roster, AgentStore, InMemoryStore};
pub use types::{AgentDefinition, AgentMetrics, AgentState, SkillTier};
