//! Scheduling options.

use serde::{Deserialize, Serialize};

use super::{Criterion, Priority};

/// Options for one scheduling call.
///
/// `lanes` and `heats_per_racer` must both be positive; this is checked
/// when the schedule is built, not here.
///
/// # Example
/// ```
/// use u_heat::models::{Criterion, ScheduleOptions};
///
/// let options = ScheduleOptions::new(4, 3)
///     .with_order([Criterion::Turnover, Criterion::Lanes]);
/// assert_eq!(options.lanes, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    /// Number of lanes on the track.
    pub lanes: usize,
    /// Number of heats each racer must run.
    pub heats_per_racer: usize,
    /// Criterion priority. Defaults to `[lanes, turnover, opponents]`.
    #[serde(default)]
    pub priority: Priority,
}

impl ScheduleOptions {
    /// Creates options with the default priority.
    pub fn new(lanes: usize, heats_per_racer: usize) -> Self {
        Self {
            lanes,
            heats_per_racer,
            priority: Priority::default(),
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets an explicit criterion order.
    pub fn with_order(mut self, order: impl IntoIterator<Item = Criterion>) -> Self {
        self.priority = Priority::Ordered(order.into_iter().collect());
        self
    }
}
