//! Schedule generation.
//!
//! The four-stage pipeline that turns a roster and parameters into a
//! validated schedule:
//!
//! 1. **`offsets`**: stagger each supervisor's cycle start so drilling
//!    windows overlap
//! 2. **`projector`**: derive a cycle state per supervisor per day
//! 3. **`generator`**: assemble the grid, aggregate per-day drilling
//!    counts, attach validation findings
//! 4. **`stats`**: coverage indicators computed from a finished result

mod generator;
mod offsets;
mod projector;
mod stats;

pub use generator::{count_drilling_per_day, generate_schedule};
pub use offsets::compute_offsets;
pub use projector::project_state;
pub use stats::ScheduleStats;
