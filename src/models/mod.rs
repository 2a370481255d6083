//! Heat scheduling domain models.
//!
//! Provides the input options, fairness criteria, and output grid types.
//!
//! # Domain Mappings
//!
//! | u-heat | Pinewood derby | Swimming | Karting |
//! |--------|----------------|----------|---------|
//! | Racer | Car | Swimmer | Driver |
//! | Lane | Track lane | Pool lane | Grid slot |
//! | Heat | Heat | Heat | Session |
//! | Schedule | Race chart | Heat sheet | Session plan |

mod criterion;
mod options;
mod schedule;

pub use criterion::{
    Criterion, Priority, PriorityWeights, DEFAULT_ORDER, RANK_WEIGHTS, UNRANKED_WEIGHT,
};
pub use options::ScheduleOptions;
pub use schedule::{Lineup, Schedule, Slot};
