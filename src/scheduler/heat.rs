//! Weighted greedy heat scheduler.
//!
//! # Algorithm
//!
//! 1. Validate options and resolve criterion weights.
//! 2. Size the grid and place BYEs.
//! 3. For each heat, in order:
//!    a. Take the heat's open lanes, rotated left by `heat mod open`.
//!    b. For each lane, rank racers with heats left and not yet in this
//!       heat by weighted score; seat the best one whose placement keeps
//!       the grid completable.
//!    c. Record every pair in the heat as met; the heat becomes the
//!       "previous heat" for turnover scoring.
//!
//! Lanes within a heat are filled strictly in sequence: opponent scores
//! depend on who was seated in earlier lanes of the same heat.
//!
//! # Complexity
//! O(h × l × r log r) scoring, where h=heats, l=lanes, r=racers, plus a
//! completion check per seat.

use tracing::{debug, trace, warn};

use super::byes::{place_byes, ByeLayout};
use super::capacity::{completable, CapacityCheck};
use super::GridSize;
use crate::error::InputError;
use crate::models::{Lineup, Schedule, ScheduleOptions, Slot};
use crate::scoring::{HeatContext, LaneLedger, PairingLedger, WeightedScorer};
use crate::validation::{resolve_options, ResolvedOptions};

/// Weighted greedy heat scheduler.
///
/// Holds no state between calls; one instance may serve many threads.
///
/// # Example
///
/// ```
/// use u_heat::models::ScheduleOptions;
/// use u_heat::scheduler::HeatScheduler;
///
/// let schedule = HeatScheduler::new()
///     .schedule(5, &ScheduleOptions::new(4, 3))
///     .unwrap();
/// assert_eq!(schedule.heat_count(), 4);
/// assert_eq!(schedule.bye_count(), 1);
/// assert!((0..5).all(|r| schedule.appearances(r) == 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeatScheduler;

impl HeatScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules `racers` racers (by index) under `options`.
    ///
    /// # Errors
    /// Returns [`InputError`] if `racers`, `options.lanes`, or
    /// `options.heats_per_racer` is zero, or if the grid would be too large
    /// to build. No work is done on failure.
    pub fn schedule(&self, racers: usize, options: &ScheduleOptions) -> Result<Schedule, InputError> {
        let resolved = resolve_options(racers, options)?;
        Ok(self.schedule_resolved(&resolved))
    }

    /// Schedules from already-validated options.
    pub fn schedule_resolved(&self, resolved: &ResolvedOptions) -> Schedule {
        let size = resolved.grid;
        debug!(
            racers = resolved.racers,
            lanes = size.lanes,
            heats = size.heats,
            byes = size.necessary_byes,
            order = ?resolved.order,
            weights = ?resolved.weights,
            "sized heat grid"
        );

        let byes = place_byes(&size);
        let scorer = WeightedScorer::new(resolved.weights);
        let mut assigner = Assigner::new(resolved, &size, &byes);

        for heat in 0..size.heats {
            assigner.fill_heat(heat, &scorer);
        }
        debug!(
            pairs_met = assigner.pairings.pair_count(),
            "filled heats"
        );

        let schedule = Schedule::from_heats(size.lanes, assigner.grid);
        if !schedule.is_complete() {
            warn!(
                unfilled = schedule.unfilled_count(),
                "schedule left slots unfilled"
            );
        }
        schedule
    }
}

/// Schedules the caller's racers and binds the result to them.
///
/// # Errors
/// Returns [`InputError`] on an empty racer list, zero lanes / heats, or
/// an oversized grid.
///
/// # Example
///
/// ```
/// use u_heat::models::{Criterion, ScheduleOptions};
/// use u_heat::schedule_heats;
///
/// let racers = ["Ada", "Bo", "Cy", "Di"];
/// let options = ScheduleOptions::new(2, 2).with_priority(Criterion::Turnover);
/// let lineup = schedule_heats(&racers, &options).unwrap();
///
/// assert_eq!(lineup.heat_count(), 4);
/// let runs = lineup
///     .heats()
///     .iter()
///     .flatten()
///     .filter(|slot| **slot == Some(&"Ada"))
///     .count();
/// assert_eq!(runs, 2);
/// ```
pub fn schedule_heats<'a, T>(
    racers: &'a [T],
    options: &ScheduleOptions,
) -> Result<Lineup<'a, T>, InputError> {
    let schedule = HeatScheduler::new().schedule(racers.len(), options)?;
    Ok(Lineup::new(racers, schedule))
}

/// Mutable state of one scheduling call.
struct Assigner<'a> {
    byes: &'a ByeLayout,
    capacities: Vec<usize>,
    grid: Vec<Vec<Slot>>,
    remaining: Vec<usize>,
    lanes_used: LaneLedger,
    pairings: PairingLedger,
    previous: Vec<bool>,
}

impl<'a> Assigner<'a> {
    fn new(resolved: &ResolvedOptions, size: &GridSize, byes: &'a ByeLayout) -> Self {
        let mut grid = size.allocate();
        for (h, row) in grid.iter_mut().enumerate() {
            for (l, slot) in row.iter_mut().enumerate() {
                if byes.is_bye(h, l) {
                    *slot = Slot::Bye;
                }
            }
        }

        let remaining = vec![resolved.heats_per_racer; resolved.racers];
        let capacities = byes.capacities();
        if !completable(&remaining, &capacities) {
            warn!(
                racers = resolved.racers,
                heats = size.heats,
                "grid cannot seat every racer exactly; some slots may stay unfilled"
            );
        }

        Self {
            byes,
            capacities,
            grid,
            remaining,
            lanes_used: LaneLedger::new(resolved.racers, size.lanes),
            pairings: PairingLedger::new(resolved.racers),
            previous: vec![false; resolved.racers],
        }
    }

    fn fill_heat(&mut self, heat: usize, scorer: &WeightedScorer) {
        let mut lanes = self.byes.open_lanes(heat);
        if lanes.is_empty() {
            self.previous.fill(false);
            return;
        }
        let shift = heat % lanes.len();
        lanes.rotate_left(shift);

        let racers = self.remaining.len();
        let mut in_heat = vec![false; racers];
        let mut placed: Vec<usize> = Vec::with_capacity(lanes.len());

        for (pos, &lane) in lanes.iter().enumerate() {
            let candidates: Vec<usize> = (0..racers)
                .filter(|&r| self.remaining[r] > 0 && !in_heat[r])
                .collect();
            if candidates.is_empty() {
                warn!(heat, lane, "no eligible racer; leaving slot unfilled");
                break;
            }

            let context = HeatContext {
                placed: &placed,
                lanes_used: &self.lanes_used,
                pairings: &self.pairings,
                previous: &self.previous,
                remaining: &self.remaining,
            };
            let check = CapacityCheck {
                remaining: &self.remaining,
                in_heat: &in_heat,
                open_after: lanes.len() - pos - 1,
                later: &self.capacities[heat + 1..],
            };
            let chosen = match scorer.select_best(&candidates, lane, &context) {
                Some(best) if check.allows(best) => best,
                _ => Self::first_allowed(scorer, &candidates, lane, &context, &check, heat),
            };

            trace!(heat, lane, racer = chosen, "seated racer");
            self.grid[heat][lane] = Slot::Racer(chosen);
            self.remaining[chosen] -= 1;
            self.lanes_used.record(chosen, lane);
            in_heat[chosen] = true;
            placed.push(chosen);
        }

        self.pairings.record_heat(&placed);
        self.previous = in_heat;
    }

    // Best-ranked candidate the capacity check accepts; the top one if none is.
    fn first_allowed(
        scorer: &WeightedScorer,
        candidates: &[usize],
        lane: usize,
        context: &HeatContext<'_>,
        check: &CapacityCheck<'_>,
        heat: usize,
    ) -> usize {
        let ranked = scorer.rank(candidates, lane, context);
        match ranked.iter().position(|&r| check.allows(r)) {
            Some(i) => {
                trace!(heat, lane, skipped = i, "top candidates would strand racers");
                ranked[i]
            }
            None => {
                warn!(heat, lane, "no placement keeps the grid completable");
                ranked[0]
            }
        }
    }
}
