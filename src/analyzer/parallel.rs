//! Parallelizability assessment.
//!
//! Whether a task splits into independently executable sub-intents is
//! inherently heuristic. The assessment lives behind a strategy trait so a
//! host can swap in its own signal without touching the analyzer; the result
//! is best-effort and callers must not treat it as authoritative.

use std::sync::OnceLock;

use regex::Regex;

use super::rules::capability_profile;

/// Strategy interface for the parallelizability signal.
pub trait ParallelismHeuristic: Send + Sync {
    /// True when the text appears to contain independent sub-intents.
    fn assess(&self, text: &str) -> bool;

    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Default heuristic: conjunction splitting.
///
/// Sequential-ordering words veto parallelism outright. Otherwise the input
/// is split at conjunctions, each fragment is classified on its own, and the
/// task counts as parallelizable only when two fragments demand distinct,
/// non-overlapping capability sets and nothing in the text names a shared
/// resource.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConjunctionHeuristic;

static SEQUENTIAL: OnceLock<Regex> = OnceLock::new();
static CONJUNCTION: OnceLock<Regex> = OnceLock::new();
static SHARED_RESOURCE: OnceLock<Regex> = OnceLock::new();

fn sequential_pattern() -> &'static Regex {
    SEQUENTIAL.get_or_init(|| {
        Regex::new(r"\b(then|after|before|first|next|finally|step)\b").unwrap()
    })
}

fn conjunction_pattern() -> &'static Regex {
    CONJUNCTION.get_or_init(|| Regex::new(r"\band\b|;").unwrap())
}

fn shared_resource_pattern() -> &'static Regex {
    SHARED_RESOURCE.get_or_init(|| Regex::new(r"\b(same|shared|common|single)\b").unwrap())
}

impl ParallelismHeuristic for ConjunctionHeuristic {
    fn assess(&self, text: &str) -> bool {
        let normalized = text.to_lowercase();

        if sequential_pattern().is_match(&normalized) {
            return false;
        }
        if shared_resource_pattern().is_match(&normalized) {
            return false;
        }

        let profiles: Vec<_> = conjunction_pattern()
            .split(&normalized)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(capability_profile)
            .filter(|caps| !caps.is_empty())
            .collect();

        if profiles.len() < 2 {
            return false;
        }

        // Any pair of fragments with non-overlapping demands is enough.
        profiles.iter().enumerate().any(|(i, a)| {
            profiles[i + 1..].iter().any(|b| a.is_disjoint(b))
        })
    }

    fn name(&self) -> &'static str {
        "conjunction"
    }
}
