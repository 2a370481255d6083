//! Assignment state read by criterion rules.

/// Lanes each racer has already raced in.
///
/// Flat `racers × lanes` bitmap, row-major by racer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneLedger {
    lanes: usize,
    used: Vec<bool>,
}

impl LaneLedger {
    /// Creates an empty ledger.
    pub fn new(racers: usize, lanes: usize) -> Self {
        Self {
            lanes,
            used: vec![false; racers * lanes],
        }
    }

    /// Whether `racer` has raced in `lane`.
    #[inline]
    pub fn has_used(&self, racer: usize, lane: usize) -> bool {
        lane < self.lanes
            && self
                .used
                .get(racer * self.lanes + lane)
                .copied()
                .unwrap_or(false)
    }

    /// Records that `racer` raced in `lane`.
    #[inline]
    pub fn record(&mut self, racer: usize, lane: usize) {
        if lane >= self.lanes {
            return;
        }
        if let Some(cell) = self.used.get_mut(racer * self.lanes + lane) {
            *cell = true;
        }
    }

    /// Number of distinct lanes `racer` has used.
    pub fn distinct_lanes(&self, racer: usize) -> usize {
        (0..self.lanes).filter(|&l| self.has_used(racer, l)).count()
    }
}

/// Unordered racer pairs that have shared a heat.
///
/// Strict upper triangle of a `racers × racers` matrix, packed. Entries
/// are only ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingLedger {
    racers: usize,
    met: Vec<bool>,
}

impl PairingLedger {
    /// Creates an empty ledger.
    pub fn new(racers: usize) -> Self {
        Self {
            racers,
            met: vec![false; racers * racers.saturating_sub(1) / 2],
        }
    }

    // (a, b) with a < b → packed row-major upper-triangle offset.
    fn offset(&self, a: usize, b: usize) -> Option<usize> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if lo == hi || hi >= self.racers {
            return None;
        }
        Some(lo * (2 * self.racers - lo - 1) / 2 + (hi - lo - 1))
    }

    /// Whether `a` and `b` have shared a heat.
    #[inline]
    pub fn have_met(&self, a: usize, b: usize) -> bool {
        self.offset(a, b)
            .and_then(|i| self.met.get(i).copied())
            .unwrap_or(false)
    }

    /// Records that `a` and `b` shared a heat.
    pub fn record(&mut self, a: usize, b: usize) {
        if let Some(i) = self.offset(a, b) {
            self.met[i] = true;
        }
    }

    /// Records every pair among `racers`.
    pub fn record_heat(&mut self, racers: &[usize]) {
        for (i, &a) in racers.iter().enumerate() {
            for &b in &racers[i + 1..] {
                self.record(a, b);
            }
        }
    }

    /// Number of pairs that have met.
    pub fn pair_count(&self) -> usize {
        self.met.iter().filter(|&&m| m).count()
    }
}

/// Snapshot of assignment state while filling one lane.
///
/// `placed` holds racers already seated in the current heat, in fill
/// order. `previous` marks racers that ran in the heat before.
#[derive(Debug, Clone, Copy)]
pub struct HeatContext<'a> {
    /// Racers already placed in this heat.
    pub placed: &'a [usize],
    /// Lanes used so far per racer.
    pub lanes_used: &'a LaneLedger,
    /// Pairs that met in earlier heats.
    pub pairings: &'a PairingLedger,
    /// Membership in the immediately preceding heat, by racer.
    pub previous: &'a [bool],
    /// Remaining heats to run, by racer.
    pub remaining: &'a [usize],
}

impl HeatContext<'_> {
    /// Whether `racer` ran in the preceding heat.
    #[inline]
    pub fn was_in_previous(&self, racer: usize) -> bool {
        self.previous.get(racer).copied().unwrap_or(false)
    }

    /// Heats `racer` still has to run.
    #[inline]
    pub fn remaining_for(&self, racer: usize) -> usize {
        self.remaining.get(racer).copied().unwrap_or(0)
    }
}
