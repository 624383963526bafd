//! Phase offset assignment.
//!
//! Staggers each supervisor's cycle start so that consecutive
//! supervisors' drilling windows overlap, targeting the "exactly two
//! drilling at all times" rule.
//!
//! # Algorithm
//!
//! Greedy and order-dependent, no search:
//! - Supervisor 0 starts on day 1 (offset 0).
//! - Supervisor 1 starts once supervisor 0 has completed 60% of their
//!   work phase.
//! - Each further supervisor starts half the previous supervisor's work
//!   phase after the previous one.
//!
//! The heuristic is not guaranteed to satisfy the coverage rule for
//! arbitrary regimens or rosters larger than two; [`crate::validation`]
//! exists to surface exactly those failures. It must not be replaced by
//! an optimizing stagger search.

use crate::models::Supervisor;

/// Computes the start-day offset for each supervisor, in roster order.
///
/// Malformed regimen strings contribute the default 14x7 work phase, per
/// the fail-soft parsing contract.
pub fn compute_offsets(supervisors: &[Supervisor]) -> Vec<u32> {
    let mut offsets: Vec<u32> = Vec::with_capacity(supervisors.len());

    for index in 0..supervisors.len() {
        let offset = match index {
            0 => 0,
            1 => {
                let first_work = supervisors[0].parsed_regimen().work_days;
                (f64::from(first_work) * 0.6).floor() as u32
            }
            _ => {
                let previous_work = supervisors[index - 1].parsed_regimen().work_days;
                // Saturate: a string of huge-but-valid work phases can push
                // the running offset past u32::MAX, which just means the
                // supervisor never starts within any realistic horizon.
                offsets[index - 1].saturating_add(previous_work / 2)
            }
        };
        offsets.push(offset);
    }

    offsets
}
