//! Search configuration and TOML loading.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Frontier management policy driving one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Level-by-level exploration; finds the minimum-depth qualifying solution.
    Bfs,
    /// One branch to max depth before backtracking, left-to-right.
    Dfs,
    /// Keep the top `beam_width` nodes per depth level. May fall back to the
    /// best surviving beam member even if it was never flagged a solution.
    Beam,
    /// Always expand the highest-valued frontier node next.
    BestFirst,
}

impl SearchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Beam => "beam",
            Self::BestFirst => "best_first",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search configuration (TOML).
///
/// Intended to be edited by humans; missing fields default to the values the
/// engine shipped with. Validated once at controller construction, never
/// mid-search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,

    /// Upper bound on candidate children generated per expansion.
    pub max_thoughts_per_step: usize,

    /// Nodes at this depth are never expanded further.
    pub max_depth: usize,

    /// Nodes retained per depth level; meaningful only for beam search.
    pub beam_width: usize,

    /// Minimum evaluator score for a node to remain viable (else pruned).
    pub value_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Beam,
            max_thoughts_per_step: 3,
            max_depth: 5,
            beam_width: 2,
            value_threshold: 0.3,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_thoughts_per_step == 0 {
            return Err(ConfigError("max_thoughts_per_step must be >= 1".to_string()));
        }
        if self.beam_width == 0 {
            return Err(ConfigError("beam_width must be >= 1".to_string()));
        }
        if !self.value_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.value_threshold)
        {
            return Err(ConfigError(format!(
                "value_threshold must be in [0, 1], got {}",
                self.value_threshold
            )));
        }
        Ok(())
    }
}

/// Load a search configuration from a TOML file.
///
/// If the file is missing, returns validated defaults.
pub fn load_config(path: &Path) -> Result<SearchConfig> {
    if !path.exists() {
        let cfg = SearchConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SearchConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SearchConfig::default().validate().expect("valid");
    }

    #[test]
    fn zero_beam_width_is_rejected() {
        let cfg = SearchConfig {
            beam_width: 0,
            ..SearchConfig::default()
        };
        let err = cfg.validate().expect_err("invalid");
        assert!(err.to_string().contains("beam_width"));
    }

    #[test]
    fn zero_thoughts_per_step_is_rejected() {
        let cfg = SearchConfig {
            max_thoughts_per_step: 0,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        for threshold in [-0.1, 1.1, f64::NAN] {
            let cfg = SearchConfig {
                value_threshold: threshold,
                ..SearchConfig::default()
            };
            assert!(cfg.validate().is_err(), "threshold {threshold} accepted");
        }
    }

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn load_parses_partial_toml_over_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "strategy = \"best_first\"\nmax_depth = 2\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.strategy, SearchStrategy::BestFirst);
        assert_eq!(cfg.max_depth, 2);
        assert_eq!(cfg.beam_width, SearchConfig::default().beam_width);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "beam_width = 0\n").expect("write");
        assert!(load_config(&path).is_err());
    }
}
