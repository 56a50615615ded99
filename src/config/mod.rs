//! Configuration types and loading.
//!
//! Provides all configuration structures for taskroute:
//! - `RouterConfig`: Top-level configuration with validation
//! - `AnalyzerConfig`, `SelectionConfig`, `ProgressionConfig`: per-component settings
//! - `ScoreWeights`: the selection scoring weights (defaults are the contract values)

mod settings;

pub use settings::{
    AnalyzerConfig, ProgressionConfig, RouterConfig, ScoreWeights, SelectionConfig,
};
