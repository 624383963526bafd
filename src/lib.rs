//! Supervisor-rotation scheduling for drilling operations.
//!
//! Projects a day-by-day cycle-state table for a roster of supervisors,
//! each on a "NxM" work/rest regimen, and validates the operational rule
//! that exactly two supervisors must be drilling at every point in time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Supervisor`, `Regimen`, `CycleState`,
//!   `ScheduleConfig`, `ScheduleCell`, `ScheduleResult`
//! - **`scheduler`**: Schedule generation — phase offsets, cycle
//!   projection, drilling-count aggregation, coverage statistics
//! - **`validation`**: Rule checks over a generated grid (drilling count,
//!   state transitions, minimum drilling runs)
//! - **`store`**: Observable roster store abstraction; the scheduling core
//!   itself stays a pure-function consumer of the supervisor list
//!
//! # Architecture
//!
//! Single-pass, stateless pipeline: roster + config → offsets → grid →
//! drilling-count vector → validation findings. No I/O, no shared mutable
//! state; [`scheduler::generate_schedule`] is a total function and is safe
//! to call concurrently for independent configs.

pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
