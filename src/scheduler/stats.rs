//! Schedule coverage statistics.
//!
//! Summary indicators computed from a finished [`ScheduleResult`], for the
//! dashboard's summary row and roster review.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Covered days | Days with exactly two supervisors drilling |
//! | Coverage rate | covered_days / horizon |
//! | Drilling days per supervisor | Drilling cells per grid row |
//! | Finding counts | Findings grouped by severity |

use std::collections::HashMap;

use crate::models::{CycleState, ScheduleResult};
use crate::validation::{Severity, REQUIRED_DRILLING};

/// Coverage indicators for a generated schedule.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Days in the projection horizon.
    pub horizon: usize,
    /// Days on which exactly two supervisors were drilling.
    pub covered_days: usize,
    /// Fraction of the horizon with exact coverage (0.0..=1.0).
    pub coverage_rate: f64,
    /// Total drilling days per supervisor id.
    pub drilling_days_by_supervisor: HashMap<i64, usize>,
    /// Number of Critical findings.
    pub critical_count: usize,
    /// Number of Error findings.
    pub error_count: usize,
    /// Number of Warning findings.
    pub warning_count: usize,
}

impl ScheduleStats {
    /// Computes statistics from a generated result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let horizon = result.drilling_per_day.len();
        let covered_days = result
            .drilling_per_day
            .iter()
            .filter(|&&count| count == REQUIRED_DRILLING)
            .count();
        let coverage_rate = if horizon == 0 {
            1.0
        } else {
            covered_days as f64 / horizon as f64
        };

        let mut drilling_days_by_supervisor = HashMap::new();
        for row in &result.grid {
            if let Some(first) = row.first() {
                let drilling = row
                    .iter()
                    .filter(|c| c.state == CycleState::Drilling)
                    .count();
                drilling_days_by_supervisor.insert(first.supervisor_id, drilling);
            }
        }

        Self {
            horizon,
            covered_days,
            coverage_rate,
            drilling_days_by_supervisor,
            critical_count: result.count_by_severity(Severity::Critical),
            error_count: result.count_by_severity(Severity::Error),
            warning_count: result.count_by_severity(Severity::Warning),
        }
    }

    /// Whether every day of the horizon had exact coverage.
    pub fn fully_covered(&self) -> bool {
        self.covered_days == self.horizon
    }
}
