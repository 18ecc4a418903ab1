//! Engine configuration.
//!
//! The heuristic has a handful of tunables. Defaults match the thresholds the
//! engine has always played with; a JSON file or CLI flags can override them.

use serde::{Deserialize, Serialize};

/// Hard cap on the investment level.
pub const MAX_INVEST_LEVEL: u32 = 20;

/// Tunable parameters for the decision engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A project whose density is below this is a cancel candidate.
    pub low_value_threshold: f64,

    /// Per-project share of the aggregate cutoff.
    /// The portfolio is globally low-value when the running density sum
    /// drops below `low_value_aggregate_ratio * project_count`.
    pub low_value_aggregate_ratio: f64,

    /// Investment level that must never be exceeded.
    pub max_invest_level: u32,

    /// Emit `# ` comment lines describing each action.
    pub emit_comments: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            low_value_threshold: 0.5,
            low_value_aggregate_ratio: 0.5,
            max_invest_level: MAX_INVEST_LEVEL,
            emit_comments: true,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-project density cutoff.
    #[must_use]
    pub fn with_low_value_threshold(mut self, threshold: f64) -> Self {
        self.low_value_threshold = threshold;
        self
    }

    /// Set the per-project share of the aggregate cutoff.
    #[must_use]
    pub fn with_low_value_aggregate_ratio(mut self, ratio: f64) -> Self {
        self.low_value_aggregate_ratio = ratio;
        self
    }

    /// Set the investment cap.
    #[must_use]
    pub fn with_max_invest_level(mut self, cap: u32) -> Self {
        self.max_invest_level = cap;
        self
    }

    /// Enable or disable `# ` comment lines.
    #[must_use]
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.emit_comments = enabled;
        self
    }

    /// Aggregate density cutoff for a portfolio of `project_count` projects.
    #[must_use]
    pub fn aggregate_threshold(&self, project_count: usize) -> f64 {
        self.low_value_aggregate_ratio * project_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.low_value_threshold, 0.5);
        assert_eq!(config.low_value_aggregate_ratio, 0.5);
        assert_eq!(config.max_invest_level, 20);
        assert!(config.emit_comments);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_low_value_threshold(1.5)
            .with_low_value_aggregate_ratio(0.25)
            .with_max_invest_level(5)
            .with_comments(false);

        assert_eq!(config.low_value_threshold, 1.5);
        assert_eq!(config.low_value_aggregate_ratio, 0.25);
        assert_eq!(config.max_invest_level, 5);
        assert!(!config.emit_comments);
    }

    #[test]
    fn test_aggregate_threshold_scales_with_projects() {
        let config = EngineConfig::default();
        assert_eq!(config.aggregate_threshold(4), 2.0);
        assert_eq!(config.aggregate_threshold(0), 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"max_invest_level": 3}"#).unwrap();
        assert_eq!(config.max_invest_level, 3);
        assert_eq!(config.low_value_threshold, 0.5);
        assert!(config.emit_comments);
    }
}
