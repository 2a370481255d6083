//! Heat scheduler and schedule KPIs.
//!
//! Data flows strictly forward:
//!
//! ```text
//! resolve options → size grid → place BYEs → greedy assignment → Schedule
//! ```
//!
//! # Algorithm
//!
//! `HeatScheduler` fills heats in order and lanes within a heat one at a
//! time, seating the racer with the best weighted score for that lane.
//! It is not optimal, but it is deterministic and fast.
//!
//! # KPI
//!
//! `ScheduleKpi` measures turnover, lane repeats, and opponent variety of
//! a finished schedule.

mod byes;
mod capacity;
mod grid;
mod heat;
mod kpi;
mod request;

pub use byes::{outermost_first, place_byes, ByeLayout};
pub use capacity::{completable, CapacityCheck};
pub use grid::{GridSize, MAX_GRID_CELLS};
pub use heat::{schedule_heats, HeatScheduler};
pub use kpi::ScheduleKpi;
pub use request::ScheduleRequest;
