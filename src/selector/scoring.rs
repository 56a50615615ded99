//! The scoring formula.
//!
//! `score = w1 * capability_match + w2 * success_rate
//!        + w3 * tier_multiplier / 2.0 + w4 * availability`
//!
//! With the contract weights (0.4 / 0.3 / 0.2 / 0.1) every term is in
//! [0, 1], so the final score is too. Scores are advisory: a concurrent
//! metrics update between reads is acceptable.

use std::collections::BTreeSet;

use crate::catalog::AgentEntry;
use crate::config::ScoreWeights;

/// The Master multiplier, used to normalize tier multipliers to [0, 1].
const TIER_NORMALIZER: f64 = 2.0;

/// `|capabilities ∩ required| / |required|`; 1.0 when nothing is required.
pub fn capability_match_ratio(capabilities: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let overlap = capabilities.intersection(required).count();
    overlap as f64 / required.len() as f64
}

/// Score one agent against the required capability set.
///
/// `already_primary` zeroes the availability term for an agent that already
/// holds the Primary role in the plan under construction.
pub fn score_agent(
    weights: &ScoreWeights,
    entry: &AgentEntry,
    required: &BTreeSet<String>,
    already_primary: bool,
) -> f64 {
    let match_ratio = capability_match_ratio(entry.capabilities(), required);
    let success_rate = entry.metrics().success_rate();
    let tier_component = entry.skill_tier().multiplier() / TIER_NORMALIZER;
    let availability = if already_primary { 0.0 } else { 1.0 };

    weights.capability_match * match_ratio
        + weights.success_rate * success_rate
        + weights.skill_tier * tier_component
        + weights.availability * availability
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgentCatalog, AgentDefinition, SkillTier};

    fn tags<const N: usize>(values: [&str; N]) -> BTreeSet<String> {
        values.into_iter().map(String::from).collect()
    }

    fn entry_with(caps: &[&str], tier: SkillTier) -> std::sync::Arc<AgentEntry> {
        let catalog = AgentCatalog::from_definitions(vec![AgentDefinition::new("probe", "")
            .with_capabilities(caps.iter().copied())
            .with_tier(tier)])
        .unwrap();
        catalog.get("probe").unwrap()
    }

    #[test]
    fn test_match_ratio() {
        assert!((capability_match_ratio(&tags(["a", "b"]), &tags(["a", "b"])) - 1.0).abs() < 1e-9);
        assert!((capability_match_ratio(&tags(["a"]), &tags(["a", "b"])) - 0.5).abs() < 1e-9);
        assert!((capability_match_ratio(&tags(["c"]), &tags(["a", "b"])) - 0.0).abs() < 1e-9);
        // Empty requirement: everything matches fully
        assert!((capability_match_ratio(&tags(["c"]), &tags([])) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fresh_novice_score() {
        let entry = entry_with(&["python"], SkillTier::Novice);
        let score = score_agent(&ScoreWeights::default(), &entry, &tags(["python"]), false);

        // 0.4 * 1.0 + 0.3 * 0.0 + 0.2 * 0.5 + 0.1 * 1.0
        assert!((score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_master_tier_component_caps_at_weight() {
        let entry = entry_with(&["python"], SkillTier::Master);
        let score = score_agent(&ScoreWeights::default(), &entry, &tags(["python"]), false);

        // 0.4 * 1.0 + 0.3 * 0.0 + 0.2 * 1.0 + 0.1 * 1.0
        assert!((score - 0.7).abs() < 1e-9);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_already_primary_loses_availability() {
        let entry = entry_with(&["python"], SkillTier::Novice);
        let weights = ScoreWeights::default();

        let available = score_agent(&weights, &entry, &tags(["python"]), false);
        let busy = score_agent(&weights, &entry, &tags(["python"]), true);
        assert!((available - busy - 0.1).abs() < 1e-9);
    }
}
