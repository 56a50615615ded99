use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub analyzer: AnalyzerConfig,
    pub selection: SelectionConfig,
    pub progression: ProgressionConfig,
}

impl RouterConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for consistency and safety.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        // Analyzer validation
        if self.analyzer.max_keywords == 0 {
            errors.push("analyzer.max_keywords must be greater than 0".to_string());
        }

        // Selection validation
        if self.selection.max_agents == 0 {
            errors.push("selection.max_agents must be greater than 0".to_string());
        }
        let w = &self.selection.weights;
        for (name, value) in [
            ("capability_match", w.capability_match),
            ("success_rate", w.success_rate),
            ("skill_tier", w.skill_tier),
            ("availability", w.availability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(format!("selection.weights.{} must be between 0.0 and 1.0", name));
            }
        }
        if (w.sum() - 1.0).abs() > 1e-6 {
            errors.push("selection.weights must sum to 1.0".to_string());
        }

        // Progression validation: thresholds must be ordered so a higher tier
        // is never easier to reach than a lower one.
        let p = &self.progression;
        for (name, rate) in [
            ("intermediate_min_success_rate", p.intermediate_min_success_rate),
            ("expert_min_success_rate", p.expert_min_success_rate),
            ("master_min_success_rate", p.master_min_success_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                errors.push(format!("progression.{} must be between 0.0 and 1.0", name));
            }
        }
        if p.intermediate_min_tasks >= p.expert_min_tasks
            || p.expert_min_tasks >= p.master_min_tasks
        {
            errors.push("progression task thresholds must strictly increase by tier".to_string());
        }
        if p.intermediate_min_success_rate > p.expert_min_success_rate
            || p.expert_min_success_rate > p.master_min_success_rate
        {
            errors.push("progression success-rate thresholds must not decrease by tier".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RouteError::Config(errors.join("; ")))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of extracted keywords retained per analysis.
    pub max_keywords: usize,
    /// Minimum character length for a word to count as a keyword.
    pub min_keyword_len: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            min_keyword_len: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Assignment cap used when the caller does not pass an explicit limit.
    pub max_agents: usize,
    pub weights: ScoreWeights,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_agents: 3,
            weights: ScoreWeights::default(),
        }
    }
}

/// Scoring weights for agent ranking. The defaults are part of the selection
/// contract; overrides must still sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub capability_match: f64,
    pub success_rate: f64,
    pub skill_tier: f64,
    pub availability: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.capability_match + self.success_rate + self.skill_tier + self.availability
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            capability_match: 0.4,
            success_rate: 0.3,
            skill_tier: 0.2,
            availability: 0.1,
        }
    }
}

/// Skill tier promotion thresholds. All conditions for a tier must hold
/// simultaneously before an agent is promoted into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub intermediate_min_tasks: u64,
    pub intermediate_min_success_rate: f64,
    pub expert_min_tasks: u64,
    pub expert_min_success_rate: f64,
    pub master_min_tasks: u64,
    pub master_min_success_rate: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            intermediate_min_tasks: 5,
            intermediate_min_success_rate: 0.75,
            expert_min_tasks: 20,
            expert_min_success_rate: 0.85,
            master_min_tasks: 50,
            master_min_success_rate: 0.90,
        }
    }
}
