//! Portfolio value signals derived from the current project snapshot.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, Project};

/// Two signals about how much the current projects are worth.
///
/// Computed fresh each turn and shared by both selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSignals {
    /// Highest-index project whose density is below the per-project cutoff.
    pub worst_low_value_index: Option<usize>,

    /// Whether the running density sum fell below the aggregate cutoff at
    /// any point during the scan.
    pub overall_low_value: bool,
}

impl ProjectSignals {
    /// Scan `projects` once, accumulating the running density sum.
    #[must_use]
    pub fn compute(projects: &[Project], config: &EngineConfig) -> Self {
        let aggregate_threshold = config.aggregate_threshold(projects.len());

        let mut signals = Self::default();
        let mut density_sum = 0.0;

        for (i, project) in projects.iter().enumerate() {
            let density = project.value_density();
            if density < config.low_value_threshold {
                // Later matches overwrite earlier ones.
                signals.worst_low_value_index = Some(i);
            }

            density_sum += density;
            if density_sum < aggregate_threshold {
                signals.overall_low_value = true;
            }
        }

        signals
    }

    /// Whether some project is a cancel candidate.
    #[must_use]
    pub fn has_low_value_project(&self) -> bool {
        self.worst_low_value_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_low_value() {
        let projects = [Project::new(5, 10), Project::new(2, 8)];
        let signals = ProjectSignals::compute(&projects, &EngineConfig::default());

        assert_eq!(signals.worst_low_value_index, None);
        assert!(!signals.overall_low_value);
        assert!(!signals.has_low_value_project());
    }

    #[test]
    fn test_last_low_value_index_wins() {
        let projects = [
            Project::new(10, 1),
            Project::new(1, 100),
            Project::new(10, 2),
            Project::new(1, 100),
        ];
        let signals = ProjectSignals::compute(&projects, &EngineConfig::default());

        assert_eq!(signals.worst_low_value_index, Some(2));
    }

    #[test]
    fn test_overall_low_value_from_early_prefix() {
        // Aggregate cutoff is 0.5 * 2 = 1.0; first prefix sum is 0.1.
        let projects = [Project::new(10, 1), Project::new(1, 100)];
        let signals = ProjectSignals::compute(&projects, &EngineConfig::default());

        assert!(signals.overall_low_value);
        assert_eq!(signals.worst_low_value_index, Some(0));
    }

    #[test]
    fn test_overall_low_value_without_single_low_project() {
        // Each density is 0.6 (above 0.5); sums 0.6, 1.2, 1.8 against cutoff 1.5.
        let projects = [Project::new(5, 3), Project::new(5, 3), Project::new(5, 3)];
        let signals = ProjectSignals::compute(&projects, &EngineConfig::default());

        assert!(signals.overall_low_value);
        assert_eq!(signals.worst_low_value_index, None);
    }

    #[test]
    fn test_empty_portfolio() {
        let signals = ProjectSignals::compute(&[], &EngineConfig::default());
        assert_eq!(signals, ProjectSignals::default());
    }

    #[test]
    fn test_thresholds_from_config() {
        let projects = [Project::new(1, 2)];
        let config = EngineConfig::default().with_low_value_threshold(3.0);
        let signals = ProjectSignals::compute(&projects, &config);

        assert_eq!(signals.worst_low_value_index, Some(0));
        assert!(!signals.overall_low_value);
    }
}
