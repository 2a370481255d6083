//! Schedule fairness metrics (KPIs).
//!
//! Measures how well a finished schedule meets each criterion.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnover | Σ over heats h ≥ 1 of racers in both heat h and h−1 |
//! | Lane repeats | Σ over racers of (appearances − distinct lanes) |
//! | Repeated pairings | Σ over pairs that met of (shared heats − 1) |
//! | Distinct opponents | Per racer, number of other racers met |

use std::collections::BTreeMap;

use crate::models::Schedule;
use crate::scoring::LaneLedger;

/// Schedule fairness indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Number of heats.
    pub heat_count: usize,
    /// Number of BYE slots.
    pub bye_count: usize,
    /// Number of unfilled slots.
    pub unfilled_count: usize,
    /// Racer appearances shared by consecutive heats.
    pub turnover: usize,
    /// Appearances in a lane the racer had already used.
    pub lane_repeats: usize,
    /// Shared heats beyond the first, over all pairs.
    pub repeated_pairings: usize,
    /// Distinct lanes per racer.
    pub distinct_lanes_by_racer: Vec<usize>,
    /// Distinct opponents per racer.
    pub distinct_opponents_by_racer: Vec<usize>,
    /// Fewest distinct opponents of any racer.
    pub min_distinct_opponents: usize,
    /// Mean distinct opponents per racer.
    pub avg_distinct_opponents: f64,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule of `racers` racers.
    ///
    /// Slots naming racers outside `0..racers` are ignored.
    pub fn calculate(schedule: &Schedule, racers: usize) -> Self {
        let heats: Vec<Vec<usize>> = (0..schedule.heat_count())
            .map(|h| {
                schedule
                    .racers_in_heat(h)
                    .into_iter()
                    .filter(|&r| r < racers)
                    .collect()
            })
            .collect();

        let turnover = heats
            .windows(2)
            .map(|pair| pair[1].iter().filter(|r| pair[0].contains(*r)).count())
            .sum();

        let mut lanes_used = LaneLedger::new(racers, schedule.lane_count());
        let mut appearances = vec![0usize; racers];
        for (_, l, slot) in schedule.cells() {
            if let Some(r) = slot.racer().filter(|&r| r < racers) {
                appearances[r] += 1;
                lanes_used.record(r, l);
            }
        }
        let distinct_lanes_by_racer: Vec<usize> =
            (0..racers).map(|r| lanes_used.distinct_lanes(r)).collect();
        let lane_repeats = appearances
            .iter()
            .zip(&distinct_lanes_by_racer)
            .map(|(a, d)| a - d)
            .sum();

        let mut shared: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for heat in &heats {
            for (i, &a) in heat.iter().enumerate() {
                for &b in &heat[i + 1..] {
                    *shared.entry((a.min(b), a.max(b))).or_insert(0) += 1;
                }
            }
        }
        let repeated_pairings = shared.values().map(|n| n - 1).sum();

        let mut distinct_opponents_by_racer = vec![0usize; racers];
        for &(a, b) in shared.keys() {
            distinct_opponents_by_racer[a] += 1;
            distinct_opponents_by_racer[b] += 1;
        }
        let min_distinct_opponents = distinct_opponents_by_racer
            .iter()
            .copied()
            .min()
            .unwrap_or(0);
        let avg_distinct_opponents = if racers == 0 {
            0.0
        } else {
            distinct_opponents_by_racer.iter().sum::<usize>() as f64 / racers as f64
        };

        Self {
            heat_count: schedule.heat_count(),
            bye_count: schedule.bye_count(),
            unfilled_count: schedule.unfilled_count(),
            turnover,
            lane_repeats,
            repeated_pairings,
            distinct_lanes_by_racer,
            distinct_opponents_by_racer,
            min_distinct_opponents,
            avg_distinct_opponents,
        }
    }

    /// Whether the schedule stays within the given limits.
    pub fn meets_thresholds(&self, max_turnover: usize, max_lane_repeats: usize) -> bool {
        self.unfilled_count == 0
            && self.turnover <= max_turnover
            && self.lane_repeats <= max_lane_repeats
    }
}
