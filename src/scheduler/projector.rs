//! Cycle state projection.
//!
//! Derives the cycle state of one supervisor on one absolute day from
//! their offset, regimen, and the induction length. Pure arithmetic over
//! the cycle position; no state is carried between days.
//!
//! # Cycle layout
//!
//! Within one `work + rest` cycle (1-based position `pos`):
//!
//! | pos | state |
//! |-----|-------|
//! | 1 | Ascent |
//! | 2 ..= 1 + induction | Induction |
//! | 1 + induction < pos < work | Drilling |
//! | work | Descent |
//! | work < pos <= work + rest | Rest |
//!
//! When `induction >= work - 1` the Drilling band is empty and every
//! cycle degenerates to ascent/induction/descent/rest with zero drilling
//! days. That is a legitimate projection; the validator reports the
//! resulting coverage deficit.

use crate::models::{CycleState, Regimen};

/// State of a supervisor on absolute day `day` (1-based).
///
/// `offset` shifts the supervisor's cycle start: days at or before the
/// offset project to Rest (the supervisor has not started yet). A
/// zero-length cycle also projects to Rest; regimens obtained through
/// parsing never have one.
pub fn project_state(day: u32, offset: u32, regimen: Regimen, induction_days: u32) -> CycleState {
    let adjusted = i64::from(day) - i64::from(offset);
    if adjusted < 1 {
        return CycleState::Rest;
    }

    let cycle_len = regimen.cycle_len();
    if cycle_len == 0 {
        return CycleState::Rest;
    }

    let pos = ((adjusted as u32 - 1) % cycle_len) + 1;
    let work = regimen.work_days;

    if pos == 1 {
        CycleState::Ascent
    } else if pos <= induction_days.saturating_add(1) {
        CycleState::Induction
    } else if pos < work {
        CycleState::Drilling
    } else if pos == work {
        CycleState::Descent
    } else {
        CycleState::Rest
    }
}
