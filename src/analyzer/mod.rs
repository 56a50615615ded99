//! Task analysis: free text in, structured `TaskAnalysis` out.
//!
//! Classification applies an ordered rule table (first match wins), then
//! supplements the capability set with detected language tags. Complexity is
//! keyword-driven, and parallelizability is assessed by a pluggable
//! heuristic. Analysis never fails: unclassifiable input degrades to the
//! `Generic` task type.

mod engine;
mod parallel;
mod rules;
mod types;

pub use engine::TaskAnalyzer;
pub use parallel::{ConjunctionHeuristic, ParallelismHeuristic};
pub use rules::{classification_rules, ClassificationRule};
pub use types::{Complexity, TaskAnalysis, TaskType};
