//! Grid sizing.
//!
//! ```text
//! heats = max(heats_per_racer, ceil(racers × heats_per_racer / lanes))
//! ```
//!
//! A racer cannot run twice in one heat, so it needs `heats_per_racer`
//! distinct heats; the grid must also hold every required appearance.
//!
//! Grids and per-racer lane tables are capped at [`MAX_GRID_CELLS`] cells.

use crate::models::Slot;

/// Largest grid (and racer × lane table) a schedule may need.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Dimensions of a heat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Number of heats.
    pub heats: usize,
    /// Number of lanes.
    pub lanes: usize,
    /// Required appearances: `racers × heats_per_racer`.
    pub total_slots: usize,
    /// Cells that must stay empty: `heats × lanes − total_slots`.
    pub necessary_byes: usize,
}

impl GridSize {
    /// Computes grid dimensions.
    ///
    /// `lanes == 0` yields `heats_per_racer` heats with no capacity; callers
    /// reject zero lanes before sizing. Products saturate at `usize::MAX`;
    /// use [`GridSize::try_compute`] to detect overflow.
    pub fn compute(racers: usize, lanes: usize, heats_per_racer: usize) -> Self {
        let total_slots = racers.saturating_mul(heats_per_racer);
        let heats = heats_per_racer.max(heats_by_capacity(total_slots, lanes));

        Self {
            heats,
            lanes,
            total_slots,
            necessary_byes: heats.saturating_mul(lanes).saturating_sub(total_slots),
        }
    }

    /// Computes grid dimensions, or `None` if any product overflows.
    pub fn try_compute(racers: usize, lanes: usize, heats_per_racer: usize) -> Option<Self> {
        let total_slots = racers.checked_mul(heats_per_racer)?;
        let heats = heats_per_racer.max(heats_by_capacity(total_slots, lanes));
        let cells = heats.checked_mul(lanes)?;

        Some(Self {
            heats,
            lanes,
            total_slots,
            necessary_byes: cells.saturating_sub(total_slots),
        })
    }

    /// Whether the grid and the racer × lane table both fit in
    /// [`MAX_GRID_CELLS`].
    pub fn within_limit(&self, racers: usize) -> bool {
        let cells = self.heats.checked_mul(self.lanes);
        let ledger = racers.checked_mul(self.lanes);
        matches!((cells, ledger), (Some(c), Some(l)) if c <= MAX_GRID_CELLS && l <= MAX_GRID_CELLS)
    }

    /// Number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.heats.saturating_mul(self.lanes)
    }

    /// Allocates an all-`Unfilled` grid.
    pub fn allocate(&self) -> Vec<Vec<Slot>> {
        vec![vec![Slot::Unfilled; self.lanes]; self.heats]
    }
}

fn heats_by_capacity(total_slots: usize, lanes: usize) -> usize {
    if lanes == 0 {
        0
    } else {
        total_slots.div_ceil(lanes)
    }
}
