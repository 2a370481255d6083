//! Lane and heat scheduling for fixed-lane race tracks.
//!
//! Assigns racers to lanes across heats so that every racer runs a
//! requested number of times while balancing three criteria: lane
//! variety, opponent variety, and turnover (racers not running in
//! back-to-back heats). The caller orders the criteria.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Criterion`, `Priority`, `ScheduleOptions`,
//!   `Schedule`, `Slot`, `Lineup`
//! - **`scheduler`**: Grid sizing, BYE placement, the greedy `HeatScheduler`,
//!   JSON requests, and `ScheduleKpi`
//! - **`scoring`**: Criterion rules and the weighted candidate scorer
//! - **`validation`**: Option resolution and schedule audits
//!
//! # Example
//!
//! ```
//! use u_heat::models::{Criterion, ScheduleOptions};
//! use u_heat::schedule_heats;
//!
//! let racers = vec!["Ada", "Bo", "Cy", "Di", "Ed"];
//! let options = ScheduleOptions::new(4, 3)
//!     .with_order([Criterion::Lanes, Criterion::Turnover, Criterion::Opponents]);
//!
//! let lineup = schedule_heats(&racers, &options).unwrap();
//! assert_eq!(lineup.heat_count(), 4);
//! assert_eq!(lineup.schedule().bye_count(), 1);
//! ```
//!
//! # Reference
//!
//! Colbourn & Dinitz (2007), "Handbook of Combinatorial Designs", on balanced
//! incomplete block designs, which this greedy approximates.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;

pub use error::InputError;
pub use scheduler::{schedule_heats, HeatScheduler};
