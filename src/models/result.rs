//! Schedule result model.
//!
//! A generated schedule: one row of cells per supervisor, the per-day
//! drilling counts, and the validation findings. Immutable once produced;
//! the presentation layer renders it as-is.

use serde::{Deserialize, Serialize};

use crate::validation::{Severity, ValidationError};

use super::CycleState;

/// One cell of the schedule grid: a supervisor's state on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCell {
    /// Day index, 1-based.
    #[serde(rename = "dia")]
    pub day: u32,
    /// Roster identifier of the supervisor this row belongs to.
    #[serde(rename = "supervisorId")]
    pub supervisor_id: i64,
    /// Supervisor name, denormalized for rendering.
    #[serde(rename = "supervisorNombre")]
    pub supervisor_name: String,
    /// Cycle state on this day.
    #[serde(rename = "estado")]
    pub state: CycleState,
}

/// A complete generated schedule.
///
/// Rows of `grid` align with the config's supervisor order; columns align
/// with days `1..=total_days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Per-supervisor rows of per-day cells (`grid[row][day - 1]`).
    pub grid: Vec<Vec<ScheduleCell>>,
    /// Number of supervisors in the Drilling state on each day.
    #[serde(rename = "perforandoPorDia")]
    pub drilling_per_day: Vec<usize>,
    /// Validation findings, in check order.
    #[serde(rename = "errores")]
    pub errors: Vec<ValidationError>,
    /// Whether the schedule satisfies the drilling-coverage rule: true iff
    /// no finding has Critical severity.
    #[serde(rename = "valido")]
    pub valid: bool,
}

impl ScheduleResult {
    /// Projection horizon in days.
    pub fn horizon(&self) -> u32 {
        self.drilling_per_day.len() as u32
    }

    /// The grid row for a supervisor, if present.
    pub fn row_for_supervisor(&self, supervisor_id: i64) -> Option<&[ScheduleCell]> {
        self.grid
            .iter()
            .find(|row| row.first().is_some_and(|c| c.supervisor_id == supervisor_id))
            .map(Vec::as_slice)
    }

    /// A supervisor's state on a given day (1-based).
    pub fn state_on(&self, supervisor_id: i64, day: u32) -> Option<CycleState> {
        self.row_for_supervisor(supervisor_id)?
            .get(day.checked_sub(1)? as usize)
            .map(|c| c.state)
    }

    /// Total drilling days for a supervisor over the horizon.
    pub fn drilling_days_for(&self, supervisor_id: i64) -> usize {
        self.row_for_supervisor(supervisor_id)
            .map(|row| {
                row.iter()
                    .filter(|c| c.state == CycleState::Drilling)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Number of findings with the given severity.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Number of Critical findings.
    pub fn critical_count(&self) -> usize {
        self.count_by_severity(Severity::Critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(day: u32, id: i64, state: CycleState) -> ScheduleCell {
        ScheduleCell {
            day,
            supervisor_id: id,
            supervisor_name: format!("Sup {id}"),
            state,
        }
    }

    fn sample_result() -> ScheduleResult {
        ScheduleResult {
            grid: vec![
                vec![
                    cell(1, 1, CycleState::Ascent),
                    cell(2, 1, CycleState::Drilling),
                    cell(3, 1, CycleState::Drilling),
                ],
                vec![
                    cell(1, 2, CycleState::Rest),
                    cell(2, 2, CycleState::Drilling),
                    cell(3, 2, CycleState::Descent),
                ],
            ],
            drilling_per_day: vec![0, 2, 1],
            errors: vec![
                ValidationError::drilling_count(1, 0),
                ValidationError::drilling_count(3, 1),
            ],
            valid: false,
        }
    }

    #[test]
    fn test_row_lookup() {
        let r = sample_result();
        assert_eq!(r.row_for_supervisor(1).unwrap().len(), 3);
        assert_eq!(r.row_for_supervisor(2).unwrap()[0].supervisor_id, 2);
        assert!(r.row_for_supervisor(99).is_none());
    }

    #[test]
    fn test_state_on() {
        let r = sample_result();
        assert_eq!(r.state_on(1, 2), Some(CycleState::Drilling));
        assert_eq!(r.state_on(2, 3), Some(CycleState::Descent));
        assert_eq!(r.state_on(2, 4), None);
        assert_eq!(r.state_on(2, 0), None);
    }

    #[test]
    fn test_drilling_days_for() {
        let r = sample_result();
        assert_eq!(r.drilling_days_for(1), 2);
        assert_eq!(r.drilling_days_for(2), 1);
        assert_eq!(r.drilling_days_for(99), 0);
    }

    #[test]
    fn test_severity_counts() {
        let r = sample_result();
        assert_eq!(r.critical_count(), 2);
        assert_eq!(r.count_by_severity(Severity::Warning), 0);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert!(json.get("perforandoPorDia").is_some());
        assert!(json.get("errores").is_some());
        assert_eq!(json["valido"], false);
        assert_eq!(json["grid"][0][0]["dia"], 1);
        assert_eq!(json["grid"][0][0]["supervisorNombre"], "Sup 1");
        assert_eq!(json["grid"][0][1]["estado"], "P");
    }
}
