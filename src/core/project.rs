//! Projects: the work items the arbiter pays out on.
//!
//! A project is a `(remaining_work, total_value)` pair taken verbatim from the
//! arbiter's snapshot for the current turn. Snapshots are replaced wholesale
//! every turn, so nothing here is ever updated in place.

use serde::{Deserialize, Serialize};

/// One project from the arbiter's current snapshot.
///
/// `remaining_work` must be positive. A zero workload is an input contract
/// violation; the density is then infinite rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Work still needed to finish the project.
    pub remaining_work: i64,

    /// Money paid out when the project is finished.
    pub total_value: i64,
}

impl Project {
    /// Create a project from a snapshot line.
    #[must_use]
    pub const fn new(remaining_work: i64, total_value: i64) -> Self {
        Self {
            remaining_work,
            total_value,
        }
    }

    /// Value per unit of remaining work.
    ///
    /// Derived from the current `(remaining_work, total_value)` pair on every
    /// call, so it can never lag behind a refreshed snapshot.
    #[must_use]
    pub fn value_density(&self) -> f64 {
        self.total_value as f64 / self.remaining_work as f64
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Project(h={}, v={})", self.remaining_work, self.total_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_density() {
        let project = Project::new(5, 10);
        assert_eq!(project.value_density(), 2.0);

        let cheap = Project::new(4, 1);
        assert_eq!(cheap.value_density(), 0.25);
    }

    #[test]
    fn test_density_follows_snapshot() {
        let mut project = Project::new(10, 10);
        assert_eq!(project.value_density(), 1.0);

        project.remaining_work = 2;
        assert_eq!(project.value_density(), 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Project::new(3, 7)), "Project(h=3, v=7)");
    }
}
