//! Schedule generation entry point.
//!
//! Chains the pipeline stages into a single total function: offsets →
//! per-day projection → drilling-count aggregation → validation. Never
//! fails for a well-formed config; malformed regimen strings degrade to
//! the default regimen inside parsing.
//!
//! # Complexity
//! O(supervisors × days), bounded by the config horizon.

use log::debug;

use crate::models::{ScheduleCell, ScheduleConfig, ScheduleResult};
use crate::validation::{self, Severity};

use super::{compute_offsets, project_state};

/// Generates and validates the full rotation schedule for a config.
///
/// Rows of the result grid follow the config's supervisor order; columns
/// cover days `1..=total_days`. The result is valid iff no Critical
/// finding was produced.
pub fn generate_schedule(config: &ScheduleConfig) -> ScheduleResult {
    let offsets = compute_offsets(&config.supervisors);
    debug!(
        "generating schedule: {} supervisors, {} days, offsets {:?}",
        config.supervisors.len(),
        config.total_days,
        offsets
    );

    let grid: Vec<Vec<ScheduleCell>> = config
        .supervisors
        .iter()
        .zip(&offsets)
        .map(|(supervisor, &offset)| {
            let regimen = supervisor.parsed_regimen();
            (1..=config.total_days)
                .map(|day| ScheduleCell {
                    day,
                    supervisor_id: supervisor.id,
                    supervisor_name: supervisor.name.clone(),
                    state: project_state(day, offset, regimen, config.induction_days),
                })
                .collect()
        })
        .collect();

    let drilling_per_day = count_drilling_per_day(&grid, config.total_days);
    let errors = validation::validate(&grid, &drilling_per_day, config);
    let valid = errors.iter().all(|e| e.severity != Severity::Critical);

    ScheduleResult {
        grid,
        drilling_per_day,
        errors,
        valid,
    }
}

/// Counts supervisors in the Drilling state for each day of the horizon.
pub fn count_drilling_per_day(grid: &[Vec<ScheduleCell>], total_days: u32) -> Vec<usize> {
    (0..total_days as usize)
        .map(|column| {
            grid.iter()
                .filter(|row| {
                    row.get(column)
                        .is_some_and(|c| c.state == crate::models::CycleState::Drilling)
                })
                .count()
        })
        .collect()
}
