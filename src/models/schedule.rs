//! Schedule (solution) model.
//!
//! A schedule is a `heats × lanes` grid. Each slot holds a racer index,
//! an intentional BYE, or, only when assignment ran out of candidates,
//! an `Unfilled` marker.
//!
//! [`Schedule`] owns its grid and refers to racers by index.
//! [`Lineup`] pairs a schedule with the caller's racer slice and resolves
//! slots to `&T`.

use serde::{Deserialize, Serialize};

/// One heat × lane cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    /// Racer by index into the input list.
    Racer(usize),
    /// Intentionally empty.
    Bye,
    /// Left empty because no eligible racer remained.
    Unfilled,
}

impl Slot {
    /// Racer index, if any.
    #[inline]
    pub fn racer(&self) -> Option<usize> {
        match *self {
            Slot::Racer(i) => Some(i),
            _ => None,
        }
    }

    /// Whether this slot is a BYE.
    #[inline]
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// Whether this slot was left unfilled.
    #[inline]
    pub fn is_unfilled(&self) -> bool {
        matches!(self, Slot::Unfilled)
    }
}

/// A complete heat schedule.
///
/// Immutable once built; every accessor returns copies or shared borrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    lanes: usize,
    heats: Vec<Vec<Slot>>,
}

impl Schedule {
    /// Creates a schedule from heat rows.
    ///
    /// Rows are taken as given; [`crate::validation::validate_schedule`]
    /// reports rows whose length differs from `lanes`.
    pub fn from_heats(lanes: usize, heats: Vec<Vec<Slot>>) -> Self {
        Self { lanes, heats }
    }

    /// Number of heats.
    #[inline]
    pub fn heat_count(&self) -> usize {
        self.heats.len()
    }

    /// Number of lanes.
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lanes
    }

    /// All heats, in order.
    pub fn heats(&self) -> &[Vec<Slot>] {
        &self.heats
    }

    /// One heat.
    pub fn heat(&self, heat: usize) -> Option<&[Slot]> {
        self.heats.get(heat).map(Vec::as_slice)
    }

    /// Slot at `[heat][lane]`.
    pub fn slot(&self, heat: usize, lane: usize) -> Option<Slot> {
        self.heats.get(heat)?.get(lane).copied()
    }

    /// Racer indices placed in a heat, in lane order.
    pub fn racers_in_heat(&self, heat: usize) -> Vec<usize> {
        self.heat(heat)
            .map(|row| row.iter().filter_map(Slot::racer).collect())
            .unwrap_or_default()
    }

    /// `(heat, lane)` positions of one racer.
    pub fn placements_for(&self, racer: usize) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(_, _, slot)| slot == Slot::Racer(racer))
            .map(|(h, l, _)| (h, l))
            .collect()
    }

    /// Number of slots occupied by one racer.
    pub fn appearances(&self, racer: usize) -> usize {
        self.cells()
            .filter(|&(_, _, slot)| slot == Slot::Racer(racer))
            .count()
    }

    /// Number of BYE slots.
    pub fn bye_count(&self) -> usize {
        self.cells().filter(|(_, _, slot)| slot.is_bye()).count()
    }

    /// Number of unfilled slots.
    pub fn unfilled_count(&self) -> usize {
        self.cells().filter(|(_, _, slot)| slot.is_unfilled()).count()
    }

    /// Number of racer placements.
    pub fn placement_count(&self) -> usize {
        self.cells().filter(|(_, _, slot)| slot.racer().is_some()).count()
    }

    /// Whether no slot is unfilled.
    pub fn is_complete(&self) -> bool {
        self.unfilled_count() == 0
    }

    /// Iterates `(heat, lane, slot)` in heat-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Slot)> + '_ {
        self.heats.iter().enumerate().flat_map(|(h, row)| {
            row.iter()
                .enumerate()
                .map(move |(l, &slot)| (h, l, slot))
        })
    }
}

/// A schedule bound to the racers it was built for.
///
/// Slots resolve to borrows of the caller's own values; racer data is
/// never copied.
#[derive(Debug, Clone)]
pub struct Lineup<'a, T> {
    racers: &'a [T],
    schedule: Schedule,
}

impl<'a, T> Lineup<'a, T> {
    /// Binds a schedule to its racers.
    pub fn new(racers: &'a [T], schedule: Schedule) -> Self {
        Self { racers, schedule }
    }

    /// The underlying index-level schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Unbinds the schedule.
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// The racers this lineup refers to.
    pub fn racers(&self) -> &'a [T] {
        self.racers
    }

    /// Raw slot at `[heat][lane]`; tells a BYE from an unfilled slot.
    pub fn slot(&self, heat: usize, lane: usize) -> Option<Slot> {
        self.schedule.slot(heat, lane)
    }

    /// Racer at `[heat][lane]`; `None` for BYE, unfilled, or out of range.
    ///
    /// Use [`Lineup::slot`] to tell those cases apart.
    pub fn get(&self, heat: usize, lane: usize) -> Option<&'a T> {
        let racers = self.racers;
        self.schedule
            .slot(heat, lane)?
            .racer()
            .and_then(|i| racers.get(i))
    }

    /// One heat, resolved. BYE and unfilled slots are both `None`.
    pub fn heat(&self, heat: usize) -> Option<Vec<Option<&'a T>>> {
        let racers = self.racers;
        self.schedule.heat(heat).map(|row| {
            row.iter()
                .map(|slot| slot.racer().and_then(|i| racers.get(i)))
                .collect()
        })
    }

    /// All heats, resolved.
    pub fn heats(&self) -> Vec<Vec<Option<&'a T>>> {
        (0..self.schedule.heat_count())
            .filter_map(|h| self.heat(h))
            .collect()
    }

    /// Number of heats.
    pub fn heat_count(&self) -> usize {
        self.schedule.heat_count()
    }

    /// Number of lanes.
    pub fn lane_count(&self) -> usize {
        self.schedule.lane_count()
    }
}
