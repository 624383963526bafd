//! Scheduling domain models.
//!
//! Core data types for the rotation problem and its solution. Serialized
//! field names match the schema the operations dashboard already consumes,
//! so a generated result can be handed straight to the presentation layer.
//!
//! # Domain Mapping
//!
//! | Type | Dashboard concept |
//! |------|-------------------|
//! | Supervisor | Roster entry (id, name, "14x7" regimen) |
//! | Regimen | Work/rest cadence of one supervisor |
//! | CycleState | Cell color/letter in the schedule grid |
//! | ScheduleConfig | Generator form inputs |
//! | ScheduleResult | Rendered grid + findings list |

mod config;
mod result;
mod state;
mod supervisor;

pub use config::ScheduleConfig;
pub use result::{ScheduleCell, ScheduleResult};
pub use state::CycleState;
pub use supervisor::{Regimen, RegimenParseError, Supervisor};
