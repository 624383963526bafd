//! Schedule generation parameters.

use serde::{Deserialize, Serialize};

use super::Supervisor;

/// Inputs to schedule generation.
///
/// Roster order is significant: phase offsets are assigned in sequence, so
/// reordering supervisors changes the staggering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Ordered roster. Supplied by the external roster store.
    #[serde(rename = "supervisores")]
    pub supervisors: Vec<Supervisor>,
    /// Induction days at the start of each work phase, after ascent.
    #[serde(rename = "diasInduccion")]
    pub induction_days: u32,
    /// Minimum acceptable length of a contiguous drilling run.
    #[serde(rename = "diasPerforacionMinimos")]
    pub min_drilling_days: u32,
    /// Projection horizon in days (>= 1).
    #[serde(rename = "diasTotales")]
    pub total_days: u32,
}

impl Default for ScheduleConfig {
    /// The generator form's default parameters: 2 induction days, 10-day
    /// minimum drilling run, 30-day horizon, empty roster.
    fn default() -> Self {
        Self {
            supervisors: Vec::new(),
            induction_days: 2,
            min_drilling_days: 10,
            total_days: 30,
        }
    }
}

impl ScheduleConfig {
    /// Creates a config for the given roster with default parameters.
    pub fn new(supervisors: Vec<Supervisor>) -> Self {
        Self {
            supervisors,
            ..Self::default()
        }
    }

    /// Sets the induction length.
    pub fn with_induction_days(mut self, days: u32) -> Self {
        self.induction_days = days;
        self
    }

    /// Sets the minimum drilling run length.
    pub fn with_min_drilling_days(mut self, days: u32) -> Self {
        self.min_drilling_days = days;
        self
    }

    /// Sets the projection horizon.
    pub fn with_total_days(mut self, days: u32) -> Self {
        self.total_days = days;
        self
    }
}
