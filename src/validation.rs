//! Rule validation for generated schedules.
//!
//! Scans a projected grid for operational-rule violations. Three
//! independent checks run over every schedule; all findings are collected
//! rather than short-circuiting:
//!
//! 1. **Drilling coverage** — exactly two supervisors must be drilling on
//!    every day of the horizon (Critical).
//! 2. **Sequence legality** — ascent must be followed by induction or
//!    drilling work, never by another ascent or an immediate descent
//!    (Error).
//! 3. **Minimum drilling run** — contiguous drilling runs shorter than the
//!    configured minimum are uneconomical rotations (Warning).
//!
//! Findings are data, not errors: generation always succeeds and the
//! caller decides presentation. Only Critical findings make a schedule
//! invalid.

use serde::{Deserialize, Serialize};

use crate::models::{CycleState, ScheduleCell, ScheduleConfig};

/// Number of supervisors that must be drilling on every day.
pub const REQUIRED_DRILLING: usize = 2;

/// Categories of schedule findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A day where the drilling count differs from [`REQUIRED_DRILLING`].
    #[serde(rename = "REGLA_2_PERFORANDO")]
    TwoDrillingRule,
    /// An operationally meaningless state transition.
    #[serde(rename = "SECUENCIA_INVALIDA")]
    InvalidSequence,
    /// A contiguous drilling run shorter than the configured minimum.
    #[serde(rename = "PERFORACION_INSUFICIENTE")]
    InsufficientDrilling,
}

/// Finding severity. Only Critical findings invalidate a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks the schedule: the coverage rule is broken.
    #[serde(rename = "CRITICO")]
    Critical,
    /// Operationally wrong but does not block the schedule.
    #[serde(rename = "ERROR")]
    Error,
    /// Suboptimal rotation worth reviewing.
    #[serde(rename = "WARNING")]
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Finding category.
    #[serde(rename = "tipo")]
    pub kind: ValidationErrorKind,
    /// Day the finding refers to (1-based), when day-specific.
    #[serde(rename = "dia", skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Supervisor the finding refers to, when supervisor-specific.
    #[serde(rename = "supervisorId", skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<i64>,
    /// Human-readable description.
    #[serde(rename = "mensaje")]
    pub message: String,
    /// Finding severity.
    #[serde(rename = "gravedad")]
    pub severity: Severity,
}

impl ValidationError {
    /// A day whose drilling count differs from the required two.
    pub fn drilling_count(day: u32, count: usize) -> Self {
        Self {
            kind: ValidationErrorKind::TwoDrillingRule,
            day: Some(day),
            supervisor_id: None,
            message: format!("Day {day}: {count} drilling (exactly {REQUIRED_DRILLING} required)"),
            severity: Severity::Critical,
        }
    }

    /// Ascent repeated on two consecutive days.
    pub fn ascent_repeat(day: u32, supervisor_id: i64, name: &str) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidSequence,
            day: Some(day),
            supervisor_id: Some(supervisor_id),
            message: format!("Supervisor {name}, day {day}: ascent repeated on consecutive days"),
            severity: Severity::Error,
        }
    }

    /// Ascent followed directly by descent, with no work in between.
    pub fn ascent_to_descent(day: u32, supervisor_id: i64, name: &str) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidSequence,
            day: Some(day),
            supervisor_id: Some(supervisor_id),
            message: format!("Supervisor {name}, day {day}: ascent followed directly by descent"),
            severity: Severity::Error,
        }
    }

    /// A drilling run shorter than the configured minimum.
    pub fn short_drilling_run(
        start_day: u32,
        supervisor_id: i64,
        name: &str,
        run_len: u32,
        min_days: u32,
    ) -> Self {
        Self {
            kind: ValidationErrorKind::InsufficientDrilling,
            day: Some(start_day),
            supervisor_id: Some(supervisor_id),
            message: format!(
                "Supervisor {name}: drilling run of only {run_len} day(s) starting day {start_day} (minimum {min_days})"
            ),
            severity: Severity::Warning,
        }
    }
}

/// Runs all rule checks over a projected grid.
///
/// `drilling_per_day` must be the per-day Drilling counts of `grid` (the
/// generator computes both). Findings are returned in check order: coverage
/// first, then per-supervisor sequence and run findings in roster order.
pub fn validate(
    grid: &[Vec<ScheduleCell>],
    drilling_per_day: &[usize],
    config: &ScheduleConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Check 1: exactly two drilling on every day.
    for (index, &count) in drilling_per_day.iter().enumerate() {
        let day = index as u32 + 1;
        if count != REQUIRED_DRILLING {
            errors.push(ValidationError::drilling_count(day, count));
        }
    }

    for row in grid {
        // Check 2: illegal ascent transitions between adjacent days.
        for pair in row.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if current.state == CycleState::Ascent {
                match next.state {
                    CycleState::Ascent => errors.push(ValidationError::ascent_repeat(
                        current.day,
                        current.supervisor_id,
                        &current.supervisor_name,
                    )),
                    CycleState::Descent => errors.push(ValidationError::ascent_to_descent(
                        current.day,
                        current.supervisor_id,
                        &current.supervisor_name,
                    )),
                    _ => {}
                }
            }
        }

        // Check 3: drilling runs shorter than the configured minimum.
        // Only runs closed by a state change are measured; a run still
        // open at the final day of the horizon is never flagged.
        let mut run_len: u32 = 0;
        let mut run_start: u32 = 0;
        for cell in row {
            if cell.state == CycleState::Drilling {
                if run_len == 0 {
                    run_start = cell.day;
                }
                run_len += 1;
            } else if run_len > 0 {
                if run_len < config.min_drilling_days {
                    errors.push(ValidationError::short_drilling_run(
                        run_start,
                        cell.supervisor_id,
                        &cell.supervisor_name,
                        run_len,
                        config.min_drilling_days,
                    ));
                }
                run_len = 0;
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Supervisor;

    fn row(id: i64, states: &[CycleState]) -> Vec<ScheduleCell> {
        states
            .iter()
            .enumerate()
            .map(|(i, &state)| ScheduleCell {
                day: i as u32 + 1,
                supervisor_id: id,
                supervisor_name: format!("Sup {id}"),
                state,
            })
            .collect()
    }

    fn config(min_drilling_days: u32) -> ScheduleConfig {
        ScheduleConfig::new(vec![Supervisor::new(1, "Sup 1")])
            .with_min_drilling_days(min_drilling_days)
    }

    fn counts(grid: &[Vec<ScheduleCell>]) -> Vec<usize> {
        let days = grid.first().map(Vec::len).unwrap_or(0);
        (0..days)
            .map(|d| {
                grid.iter()
                    .filter(|r| r[d].state == CycleState::Drilling)
                    .count()
            })
            .collect()
    }

    #[test]
    fn test_drilling_count_rule() {
        use CycleState::{Drilling as P, Rest as D};
        let grid = vec![row(1, &[P, P, D]), row(2, &[P, D, D])];
        let per_day = counts(&grid); // [2, 1, 0]

        let errors = validate(&grid, &per_day, &config(0));
        let critical: Vec<_> = errors
            .iter()
            .filter(|e| e.severity == Severity::Critical)
            .collect();
        assert_eq!(critical.len(), 2);
        assert_eq!(critical[0].day, Some(2));
        assert_eq!(critical[1].day, Some(3));
        assert!(critical
            .iter()
            .all(|e| e.kind == ValidationErrorKind::TwoDrillingRule));
    }

    #[test]
    fn test_ascent_repeat_flagged() {
        use CycleState::Ascent as S;
        let grid = vec![row(1, &[S, S, S])];
        let errors = validate(&grid, &counts(&grid), &config(0));

        let seq: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidSequence)
            .collect();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].day, Some(1));
        assert_eq!(seq[1].day, Some(2));
        assert!(seq.iter().all(|e| e.severity == Severity::Error));
        assert!(seq.iter().all(|e| e.supervisor_id == Some(1)));
    }

    #[test]
    fn test_ascent_to_descent_flagged() {
        use CycleState::{Ascent as S, Descent as B, Rest as D};
        let grid = vec![row(1, &[S, B, D])];
        let errors = validate(&grid, &counts(&grid), &config(0));

        let seq: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidSequence)
            .collect();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].day, Some(1));
    }

    #[test]
    fn test_legal_transitions_not_flagged() {
        use CycleState::{Ascent as S, Descent as B, Drilling as P, Induction as I, Rest as D};
        // A full healthy cycle: no sequence findings expected.
        let grid = vec![row(1, &[S, I, I, P, P, P, B, D, D])];
        let errors = validate(&grid, &counts(&grid), &config(0));
        assert!(errors
            .iter()
            .all(|e| e.kind != ValidationErrorKind::InvalidSequence));
    }

    #[test]
    fn test_short_run_closed_by_state_change() {
        use CycleState::{Descent as B, Drilling as P, Induction as I};
        let grid = vec![row(1, &[I, P, P, B])];
        let errors = validate(&grid, &counts(&grid), &config(5));

        let runs: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InsufficientDrilling)
            .collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].day, Some(2));
        assert_eq!(runs[0].severity, Severity::Warning);
        assert!(runs[0].message.contains("only 2 day(s)"));
    }

    #[test]
    fn test_run_open_at_horizon_not_flagged() {
        use CycleState::{Drilling as P, Induction as I};
        // Same short run, but it reaches the end of the horizon with no
        // closing transition, so it is not measured.
        let grid = vec![row(1, &[I, P, P])];
        let errors = validate(&grid, &counts(&grid), &config(5));
        assert!(errors
            .iter()
            .all(|e| e.kind != ValidationErrorKind::InsufficientDrilling));
    }

    #[test]
    fn test_multiple_short_runs() {
        use CycleState::{Drilling as P, Rest as D};
        let grid = vec![row(1, &[P, D, P, P, D])];
        let errors = validate(&grid, &counts(&grid), &config(3));

        let runs: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InsufficientDrilling)
            .collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].day, Some(1));
        assert_eq!(runs[1].day, Some(3));
    }

    #[test]
    fn test_run_meeting_minimum_not_flagged() {
        use CycleState::{Drilling as P, Rest as D};
        let grid = vec![row(1, &[P, P, P, D])];
        let errors = validate(&grid, &counts(&grid), &config(3));
        assert!(errors
            .iter()
            .all(|e| e.kind != ValidationErrorKind::InsufficientDrilling));
    }

    #[test]
    fn test_findings_collected_not_short_circuited() {
        use CycleState::{Ascent as S, Drilling as P, Rest as D};
        // One supervisor: coverage broken everywhere, an S->S pair, and a
        // short closed drilling run.
        let grid = vec![row(1, &[S, S, P, D])];
        let errors = validate(&grid, &counts(&grid), &config(2));

        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TwoDrillingRule));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSequence));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InsufficientDrilling));
    }

    #[test]
    fn test_wire_format() {
        let e = ValidationError::drilling_count(3, 1);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["tipo"], "REGLA_2_PERFORANDO");
        assert_eq!(json["gravedad"], "CRITICO");
        assert_eq!(json["dia"], 3);
        assert!(json.get("supervisorId").is_none());

        let w = ValidationError::short_drilling_run(2, 7, "Vega", 1, 10);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["tipo"], "PERFORACION_INSUFICIENTE");
        assert_eq!(json["gravedad"], "WARNING");
        assert_eq!(json["supervisorId"], 7);
    }
}
